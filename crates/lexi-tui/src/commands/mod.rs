//! `:` commands — parsed from the command bar and applied to [`AppState`].

use crate::{app::AppState, theme::Theme};

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    /// Toggle the help popup.
    Help,
    /// Switch to a built-in theme.
    Theme(String),
    /// Toggle variant forms in the list and detail pane.
    Variants,
    /// Toggle dialect lines in the detail pane.
    Dialect,
    /// Empty the query and drop the result set.
    Clear,
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    ///
    /// Returns `Ok(cmd)` on success, `Err(message)` on failure. An empty
    /// string returns `Err("")` as a sentinel meaning "close without acting".
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" => Ok(Command::Quit),
            "help" => Ok(Command::Help),
            "va" | "variants" => Ok(Command::Variants),
            "dialect" => Ok(Command::Dialect),
            "clear" => Ok(Command::Clear),
            "theme" => {
                if rest.is_empty() {
                    Err("usage: theme <default|gruvbox>".to_string())
                } else {
                    Ok(Command::Theme(rest.to_string()))
                }
            }
            other => Err(format!("unknown command: {other}")),
        }
    }
}

/// Execute a parsed [`Command`] against the application state.
pub fn execute_command(s: &mut AppState, cmd: Command) {
    tracing::debug!(command = ?cmd, "executing command");
    match cmd {
        Command::Quit => s.quit = true,
        Command::Help => s.show_help = !s.show_help,
        Command::Theme(name) => s.theme = Theme::by_name(&name),
        Command::Variants => s.list.show_variants = !s.list.show_variants,
        Command::Dialect => s.show_dialect = !s.show_dialect,
        Command::Clear => {
            if s.query.clear() {
                s.refresh_results();
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
