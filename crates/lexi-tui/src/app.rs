//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic. Every edit of the query
//! re-runs the search against the entries parsed at startup.

use crate::{
    commands::{execute_command, Command},
    event::{self, AppEvent},
    theme::Theme,
    widgets::{
        command_bar::{CommandBar, CommandBarState},
        entry_detail::{DetailOptions, EntryDetail, EntryDetailState},
        entry_list::{EmptyReason, EntryList, EntryListState},
        header::Header,
        help::HelpPopup,
        query_bar::{QueryBar, QueryBarState},
    },
};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use lexi_core::{config::Config, filter_indices, Entry, Matcher, Query};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    Frame, Terminal,
};
use std::{io, time::Duration};

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    Detail,
    QueryBar,
    /// Vim-style `:` command line is active.
    Command,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub entries: Vec<Entry>,
    /// Shown in the header; the path or URL the entries came from.
    pub source_name: String,
    pub list: EntryListState,
    pub detail: EntryDetailState,
    pub query: QueryBarState,
    /// Compiled form of `query.query`, kept for highlighting.
    pub matcher: Option<Matcher>,
    pub empty: EmptyReason,
    pub show_dialect: bool,
    pub focus: Focus,
    /// Focus state before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub theme: Theme,
    pub config: Config,
    pub show_help: bool,
    pub command_bar: CommandBarState,
    pub quit: bool,
}

impl AppState {
    /// Recompile the query and replace the result set.
    ///
    /// An empty query and an invalid one both leave the list empty; the
    /// distinction is kept in `empty` so the list can say which.
    ///
    /// Mirrors the branching of [`lexi_core::search_indices`] but keeps the
    /// compiled matcher for highlighting; keep the two in step.
    pub fn refresh_results(&mut self) {
        match Query::compile_with(&self.query.query, &self.config.search) {
            Ok(Query::Empty) => {
                self.query.error = None;
                self.matcher = None;
                self.empty = EmptyReason::NoQuery;
                self.list.set_hits(Vec::new());
            }
            Ok(Query::Pattern(matcher)) => {
                let hits = filter_indices(&matcher, &self.entries);
                tracing::debug!(query = %self.query.query, hits = hits.len(), "results refreshed");
                self.query.error = None;
                self.matcher = Some(matcher);
                self.empty = EmptyReason::NoMatches;
                self.list.set_hits(hits);
            }
            Err(err) => {
                tracing::warn!(query = %self.query.query, error = %err, "query rejected");
                self.query.error = Some(short_error(&err));
                self.matcher = None;
                self.empty = EmptyReason::InvalidQuery;
                self.list.set_hits(Vec::new());
            }
        }
        self.detail.reset();
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.list.selected().and_then(|i| self.entries.get(i))
    }

    fn detail_options(&self) -> DetailOptions {
        DetailOptions {
            show_variants: self.list.show_variants,
            show_dialect: self.show_dialect,
        }
    }
}

/// The regex crate's messages span several lines; the query bar has one.
fn short_error(err: &lexi_core::QueryError) -> String {
    let lexi_core::QueryError::InvalidPattern { source, .. } = err;
    let full = source.to_string();
    match full.lines().last().map(str::trim) {
        Some(last) if !last.is_empty() => {
            format!("invalid pattern: {}", last.trim_start_matches("error: "))
        }
        _ => "invalid pattern".to_string(),
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(entries: Vec<Entry>, source_name: String, config: Config) -> Self {
        let theme = Theme::by_name(&config.ui.theme);
        let state = AppState {
            entries,
            source_name,
            list: EntryListState::new(config.ui.show_variants),
            detail: EntryDetailState::default(),
            query: QueryBarState::default(),
            matcher: None,
            empty: EmptyReason::NoQuery,
            show_dialect: config.ui.show_dialect,
            // Nothing to browse until something is typed.
            focus: Focus::QueryBar,
            prev_focus: Focus::QueryBar,
            theme,
            config,
            show_help: false,
            command_bar: CommandBarState::default(),
            quit: false,
        };
        App { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            self.draw(terminal)?;

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind == crossterm::event::KeyEventKind::Press => {
                        let raw = Event::Key(key);
                        // Use insert-mode mapping when a text widget is focused
                        let app_event = if is_insert_mode(self.state.focus) {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                            self.handle(ev);
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other) {
                            self.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Render one frame. Generic over the backend so tests can draw into a
    /// `TestBackend`.
    pub fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        B::Error: Send + Sync + 'static,
    {
        let s = &self.state;
        terminal.draw(|frame| draw(frame, s))?;
        Ok(())
    }

    pub fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        // Help popup intercepts all events; only close keys pass through.
        if s.show_help {
            match event {
                AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit => {
                    tracing::debug!("help popup closed");
                    s.show_help = false;
                }
                _ => {}
            }
            return;
        }

        // Command mode intercepts all events.
        if s.focus == Focus::Command {
            match event {
                AppEvent::Escape => {
                    tracing::debug!("command bar cancelled");
                    s.command_bar.clear();
                    s.focus = s.prev_focus;
                }
                AppEvent::Quit => s.quit = true,
                AppEvent::Enter => match Command::parse(&s.command_bar.input) {
                    Ok(cmd) => {
                        s.command_bar.clear();
                        s.focus = s.prev_focus;
                        execute_command(s, cmd);
                    }
                    Err(msg) if msg.is_empty() => {
                        // Empty input — just close
                        s.command_bar.clear();
                        s.focus = s.prev_focus;
                    }
                    Err(msg) => {
                        // Show the error; bar stays open
                        s.command_bar.error = Some(msg);
                    }
                },
                other => s.command_bar.handle(&other),
            }
            return;
        }

        match event {
            AppEvent::Char('?') if s.focus != Focus::QueryBar => {
                tracing::debug!("help popup opened");
                s.show_help = true;
            }

            AppEvent::Char(':') if s.focus != Focus::QueryBar => {
                tracing::debug!(prev_focus = ?s.focus, "entering command mode");
                s.prev_focus = s.focus;
                s.command_bar.clear();
                s.focus = Focus::Command;
            }

            AppEvent::Quit => {
                tracing::debug!("quit");
                s.quit = true;
            }

            // Leave the query bar for the results
            AppEvent::Escape | AppEvent::Enter if s.focus == Focus::QueryBar => {
                tracing::debug!("focus: QueryBar -> List");
                s.focus = Focus::List;
            }

            AppEvent::Enter if s.focus == Focus::List => {
                if s.list.selected().is_some() {
                    s.focus = Focus::Detail;
                }
            }

            AppEvent::Escape if s.focus == Focus::Detail => s.focus = Focus::List,

            // Tab-cycle focus: List → Detail → QueryBar → List
            AppEvent::FocusNext => {
                let next = match s.focus {
                    Focus::List => Focus::Detail,
                    Focus::Detail => Focus::QueryBar,
                    Focus::QueryBar | Focus::Command => Focus::List,
                };
                tracing::debug!(from = ?s.focus, to = ?next, "focus cycle");
                s.focus = next;
            }

            AppEvent::QueryFocus => {
                tracing::debug!("focus -> QueryBar");
                s.focus = Focus::QueryBar;
            }

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}

            other => dispatch_to_focused(s, other),
        }
    }
}

/// Returns true when the current focus is on a text-input widget, meaning
/// alphabetic keys should produce characters rather than trigger shortcuts.
fn is_insert_mode(focus: Focus) -> bool {
    matches!(focus, Focus::QueryBar | Focus::Command)
}

/// Route an event to the widget that owns the current focus.
fn dispatch_to_focused(s: &mut AppState, event: AppEvent) {
    match s.focus {
        Focus::List => {
            let before = s.list.selected();
            s.list.handle(&event);
            if s.list.selected() != before {
                s.detail.reset();
            }
        }
        Focus::Detail => s.detail.handle(&event),
        Focus::QueryBar => match event {
            // Arrows browse the results without leaving the query bar
            AppEvent::Nav(crate::event::Direction::Up | crate::event::Direction::Down) => {
                let before = s.list.selected();
                s.list.handle(&event);
                if s.list.selected() != before {
                    s.detail.reset();
                }
            }
            _ => {
                if s.query.handle(&event) {
                    s.refresh_results();
                }
            }
        },
        Focus::Command => {} // handled before dispatch, should not reach here
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: 1-line header | body | 3-line query bar
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .split(area);

    let pct = state.config.ui.list_pane_width_pct.clamp(10, 90);
    let horiz = Layout::default()
        .direction(LayoutDir::Horizontal)
        .constraints([Constraint::Percentage(pct), Constraint::Fill(1)])
        .split(vert[1]);

    let hits = state.list.hits.len();
    let matcher = state.matcher.as_ref();

    frame.render_widget(
        Header::new(&state.source_name, hits, state.entries.len(), &state.theme),
        vert[0],
    );
    frame.render_widget(
        EntryList::new(
            &state.list,
            &state.entries,
            matcher,
            state.empty,
            state.focus == Focus::List,
            &state.theme,
        ),
        horiz[0],
    );
    frame.render_widget(
        EntryDetail::new(
            state.selected_entry(),
            &state.detail,
            matcher,
            state.detail_options(),
            state.focus == Focus::Detail,
            &state.theme,
        ),
        horiz[1],
    );
    frame.render_widget(
        QueryBar::new(&state.query, hits, state.focus == Focus::QueryBar, &state.theme),
        vert[2],
    );

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect { y: area.bottom().saturating_sub(1), height: 1, ..area };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
        return;
    }

    if state.focus == Focus::QueryBar {
        let qb = QueryBar::new(&state.query, hits, true, &state.theme);
        frame.set_cursor_position(qb.cursor_position(vert[2]));
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
