//! lexi TUI — ratatui application shell.
//!
//! Entries are parsed once by the caller; the shell only searches and
//! displays them.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use lexi_core::{config::Config, Entry};

/// Start the TUI over an already-parsed dictionary. Blocks until the user
/// quits.
pub fn run(entries: Vec<Entry>, source_name: String, config: Config) -> anyhow::Result<()> {
    tracing::info!(entries = entries.len(), source = %source_name, "starting tui");
    App::new(entries, source_name, config).run()
}
