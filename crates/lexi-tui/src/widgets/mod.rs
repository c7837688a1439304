//! Ratatui widgets for the lexi TUI.

pub mod command_bar;
pub mod entry_detail;
pub mod entry_list;
pub mod header;
pub mod help;
pub mod query_bar;
