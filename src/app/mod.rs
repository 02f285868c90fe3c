//! Application glue module
//!
//! Configuration and the assembly of a glyph selection from it.

mod config;
mod selection;

pub use config::{Config, ConfigError};
pub use selection::GlyphSelection;
