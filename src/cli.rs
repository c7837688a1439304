//! Command-line surface.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "lexi",
    version,
    about = "Browse and search SFM (Toolbox) dictionaries in the terminal"
)]
pub struct Cli {
    /// Dictionary to open: a file path, `-` for stdin, or an http:// URL.
    /// Falls back to `[source] default` in the config file.
    pub source: Option<String>,

    /// Read configuration from this file instead of ~/.config/lexi/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write debug logs to the `[log] file` path (tail -f to inspect).
    #[arg(long)]
    pub debug: bool,

    /// Print matches to stdout instead of starting the TUI.
    #[arg(long)]
    pub headless: bool,

    /// Wildcard query for headless mode; `*` matches any run of characters.
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Output format for headless mode.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Print only the number of matches.
    #[arg(long)]
    pub count: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// A readable block per entry.
    Text,
    /// One JSON array.
    Json,
    /// One JSON object per line.
    Jsonl,
}
