//! Glyph Ranges Library
//!
//! Computes the smallest set of Unicode code-point ranges a font atlas must
//! cover to show a given selection of scripts and text. This crate provides:
//!
//! - `ranges`: range types, the range builder, predefined tables and the
//!   zero-terminated consumer encoding
//! - `wordlist`: newline-delimited word lists fed into the builder
//! - `alloc`: allocation accounting around the system allocator
//! - `app`: configuration and selection assembly for the runner

pub mod alloc;
pub mod app;
pub mod ranges;
pub mod wordlist;

pub use ranges::{CodePoint, CodePointRange, GlyphRangeBuilder, GlyphRanges, RangeTable};

/// Library error
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Encode(#[from] ranges::EncodeError),
    #[error(transparent)]
    WordList(#[from] wordlist::WordListError),
    #[error(transparent)]
    Config(#[from] app::ConfigError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
