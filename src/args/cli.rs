use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use crate::page::{DEFAULT_REVEAL_THRESHOLD, DEFAULT_SHADE_OFFSET};
use crate::store::DEFAULT_KEY_PREFIX;

use super::defaults::default_store_path;
use super::parsers::{parse_duration_arg, parse_positive_u64, parse_ratio};
use super::types::PositiveU64;

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print the checkpoints stored for a document as JSON
    Inspect(InspectArgs),
}

#[derive(Debug, Args, Clone)]
pub struct InspectArgs {
    /// Document whose stored checkpoints are printed
    pub document: PathBuf,
}

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Keyboard-driven scroll checkpoint recorder and player for presentation documents."
)]
pub struct AssistArgs {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Document to present (Markdown headings become sections)
    pub document: Option<PathBuf>,

    /// Path to config file (TOML/JSON). Defaults to ./scroll-assist.toml or ./scroll-assist.json if present.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Checkpoint store file (JSON object of key to record)
    #[arg(long = "store", global = true, default_value_t = default_store_path())]
    pub store: String,

    /// Prefix of every stored checkpoint key
    #[arg(long = "key-prefix", global = true, default_value = DEFAULT_KEY_PREFIX)]
    pub key_prefix: String,

    /// Animation frames per second
    #[arg(long = "fps", default_value = "60", value_parser = parse_positive_u64)]
    pub fps: PositiveU64,

    /// Milliseconds of scrolling per viewport height travelled
    #[arg(
        long = "ms-per-viewport",
        default_value = "100",
        value_parser = parse_positive_u64
    )]
    pub ms_per_viewport: PositiveU64,

    /// Shortest checkpoint animation (supports ms/s/m)
    #[arg(long = "min-scroll", default_value = "200ms", value_parser = parse_duration_arg)]
    pub min_scroll: Duration,

    /// Longest checkpoint animation (supports ms/s/m)
    #[arg(long = "max-scroll", default_value = "4s", value_parser = parse_duration_arg)]
    pub max_scroll: Duration,

    /// Rows scrolled before the header switches to its shaded style
    #[arg(long = "header-shade-offset", default_value_t = DEFAULT_SHADE_OFFSET)]
    pub header_shade_offset: u64,

    /// Visible share of a section (0.0-1.0) needed to reveal it
    #[arg(
        long = "reveal-threshold",
        default_value_t = DEFAULT_REVEAL_THRESHOLD,
        value_parser = parse_ratio
    )]
    pub reveal_threshold: f64,

    /// Write logs to this file while the presentation view is open
    #[arg(long = "log-file", global = true)]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging (sets log level to debug unless overridden by SCROLL_ASSIST_LOG/RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,
}
