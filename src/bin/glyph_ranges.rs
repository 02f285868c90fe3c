//! Glyph Ranges Runner
//!
//! Builds the code-point ranges a font atlas needs for a set of range
//! tables, literal text and word lists, and prints them in a form a font
//! loader can consume.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use glyph_ranges::alloc::{AllocationStats, CountingAllocator};
use glyph_ranges::app::{Config, GlyphSelection};
use glyph_ranges::ranges::{GlyphWidth, OverflowPolicy, RangeTable};
use glyph_ranges::wordlist::Utf8Policy;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[global_allocator]
static ALLOC: CountingAllocator = CountingAllocator::new();

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Try 'glyph-ranges --help'");
            return ExitCode::FAILURE;
        },
    };

    if args.show_help {
        print_help();
        return ExitCode::SUCCESS;
    }

    let result = run(&args);

    if args.show_stats {
        let stats = ALLOC.snapshot();
        tracing::debug!(?stats, "allocation counters");
        eprintln!(
            "allocated={} peak={} allocations={}",
            stats.allocated, stats.peak, stats.allocations
        );
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Fatal error: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        },
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.config()?;
    let selection = GlyphSelection::from_config(&config)?;

    match args.output_format {
        OutputFormat::Text => {
            for range in &selection.ranges {
                println!("{}", range);
            }
            println!("---");
            println!(
                "{} ranges, {} glyphs ({} glyph index)",
                selection.ranges.len(),
                selection.glyph_count,
                selection.width
            );
            if selection.dropped_count() > 0 {
                println!("{} code points dropped above the glyph width", selection.dropped_count());
            }
            if selection.skipped > 0 {
                println!("{} malformed UTF-8 sequences skipped", selection.skipped);
            }
        },
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&selection)?);
        },
        OutputFormat::Flat => {
            let table = selection.ranges.to_terminated(selection.width, OverflowPolicy::Reject)?;
            print!("{}", format_flat(&table));
        },
    }

    Ok(())
}

/// One `lo, hi,` pair per line, then the terminator
fn format_flat(table: &[u32]) -> String {
    let mut out = String::new();
    for pair in table.chunks_exact(2) {
        out.push_str(&format!("0x{:04X}, 0x{:04X},\n", pair[0], pair[1]));
    }
    out.push_str("0,\n");
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
    Flat,
}

#[derive(Debug, Default)]
struct Args {
    config_path: Option<PathBuf>,
    tables: Vec<RangeTable>,
    text: Vec<String>,
    word_lists: Vec<PathBuf>,
    width: Option<GlyphWidth>,
    reject_overflow: bool,
    strict: bool,
    output_format: OutputFormat,
    show_stats: bool,
    show_help: bool,
}

impl Args {
    fn parse<I>(args: I) -> Result<Self, Box<dyn std::error::Error>>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Args::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let mut value = |flag: &str| {
                args.next()
                    .ok_or_else(|| format!("missing value for {}", flag))
            };
            match arg.as_str() {
                "-t" | "--table" => parsed.tables.push(value(&arg)?.parse()?),
                "-s" | "--text" => parsed.text.push(value(&arg)?),
                "-c" | "--config" => parsed.config_path = Some(PathBuf::from(value(&arg)?)),
                "-w" | "--width" => parsed.width = Some(value(&arg)?.parse()?),
                "--reject-overflow" => parsed.reject_overflow = true,
                "--strict" => parsed.strict = true,
                "-j" | "--json" => parsed.output_format = OutputFormat::Json,
                "-f" | "--flat" => parsed.output_format = OutputFormat::Flat,
                "--stats" => parsed.show_stats = true,
                "-h" | "--help" => parsed.show_help = true,
                other if other.starts_with('-') && other.len() > 1 => {
                    return Err(format!("unknown option '{}'", other).into());
                },
                // Anything else is a word list
                _ => parsed.word_lists.push(PathBuf::from(&arg)),
            }
        }

        Ok(parsed)
    }

    /// Layer the command line over the loaded configuration
    fn config(&self) -> Result<Config, glyph_ranges::Error> {
        let mut config = match &self.config_path {
            Some(path) => Config::load(path)?,
            None => Config::load_or_default(),
        };

        if !self.tables.is_empty() {
            config.tables = self.tables.clone();
        }
        if !self.text.is_empty() || !self.word_lists.is_empty() {
            config.text = self.text.clone();
            config.word_lists = self.word_lists.clone();
        }
        if let Some(width) = self.width {
            config.glyph_width = width;
        }
        if self.reject_overflow {
            config.overflow = OverflowPolicy::Reject;
        }
        if self.strict {
            config.utf8 = Utf8Policy::Strict;
        }
        Ok(config)
    }
}

fn print_help() {
    println!("Glyph Ranges Runner");
    println!();
    println!("Usage: glyph-ranges [OPTIONS] [WORD_LIST...]");
    println!();
    println!("Options:");
    println!("  -t, --table <NAME>    Include a predefined range table (repeatable)");
    println!("  -s, --text <TEXT>     Include the characters of TEXT (repeatable)");
    println!("  -c, --config <PATH>   Load configuration from PATH");
    println!("  -w, --width <16|32>   Glyph index width of the font loader");
    println!("      --reject-overflow Fail instead of dropping code points above the width");
    println!("      --strict          Fail on malformed UTF-8 in word lists");
    println!("  -j, --json            Output the selection as JSON");
    println!("  -f, --flat            Output a zero-terminated lo/hi table");
    println!("      --stats           Print allocation counters to stderr");
    println!("  -h, --help            Show this help message");
    println!();
    println!("Tables:");
    for table in RangeTable::ALL {
        println!("  {}", table);
    }
    println!();
    println!("Tables given on the command line replace the configured tables.");
    println!("Text or word lists given on the command line replace the configured ones.");
    println!("Without a config file the Japanese table plus U+20B9F is used.");
    println!();
    println!("Examples:");
    println!("  glyph-ranges -t japanese-kana kanji/regular_use.txt kanji/personal_name_1.txt");
    println!("  glyph-ranges -w 32 --flat");
    println!("  glyph-ranges -t korean --json > ranges.json");
}
