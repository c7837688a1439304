//! Results list widget — the scrollable list of matching entries on the left.
//!
//! # Navigation (when pane is focused)
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` | Move cursor up one entry |
//! | `↓` / `j` | Move cursor down one entry |
//! | `PageUp` / `Ctrl+u` | Up one page |
//! | `PageDown` / `Ctrl+d` | Down one page |
//! | `g` / `G` | First / last result |
//!
//! # Scroll semantics
//!
//! `hits` holds indices into the app's entry vector, in dictionary order.
//! `cursor` indexes into `hits`; `offset` is the first visible row. The
//! cursor is always kept within the visible window.

use std::cell::Cell;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use lexi_core::{Entry, Matcher};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
        Wrap,
    },
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

pub struct EntryListState {
    /// Indices of matching entries, ascending.
    pub hits: Vec<usize>,
    /// Index into `hits` of the highlighted row.
    pub cursor: usize,
    /// Index into `hits` of the first visible row.
    pub offset: usize,
    /// Whether variants are shown after the headword.
    pub show_variants: bool,
    /// Cached from the last render so `handle()` can page by screenfuls.
    last_height: Cell<usize>,
}

impl EntryListState {
    pub fn new(show_variants: bool) -> Self {
        Self {
            hits: Vec::new(),
            cursor: 0,
            offset: 0,
            show_variants,
            last_height: Cell::new(20),
        }
    }

    fn height(&self) -> usize {
        self.last_height.get().max(1)
    }

    /// Replace the result set and return the cursor to the top.
    pub fn set_hits(&mut self, hits: Vec<usize>) {
        self.hits = hits;
        self.cursor = 0;
        self.offset = 0;
    }

    /// Entry index under the cursor.
    pub fn selected(&self) -> Option<usize> {
        self.hits.get(self.cursor).copied()
    }

    /// Handle a navigation event from the app shell.
    pub fn handle(&mut self, event: &AppEvent) {
        let total = self.hits.len();
        if total == 0 {
            return;
        }
        let last = total - 1;
        let page = self.height();

        self.cursor = match event {
            AppEvent::Nav(Direction::Up) => self.cursor.saturating_sub(1),
            AppEvent::Nav(Direction::Down) => (self.cursor + 1).min(last),
            AppEvent::ScrollUp => self.cursor.saturating_sub(page),
            AppEvent::ScrollDown => (self.cursor + page).min(last),
            AppEvent::ScrollToTop => 0,
            AppEvent::ScrollToBottom => last,
            _ => return,
        };
        self.keep_cursor_visible();
        tracing::debug!(cursor = self.cursor, offset = self.offset, "results: cursor moved");
    }

    fn keep_cursor_visible(&mut self) {
        let height = self.height();
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + height {
            self.offset = self.cursor + 1 - height;
        }
    }
}

/// What the list shows when `hits` is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// Nothing typed yet.
    NoQuery,
    /// The query did not compile.
    InvalidQuery,
    /// The query compiled and matched nothing.
    NoMatches,
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct EntryList<'a> {
    state: &'a EntryListState,
    entries: &'a [Entry],
    matcher: Option<&'a Matcher>,
    empty: EmptyReason,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> EntryList<'a> {
    pub fn new(
        state: &'a EntryListState,
        entries: &'a [Entry],
        matcher: Option<&'a Matcher>,
        empty: EmptyReason,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self { state, entries, matcher, empty, focused, theme }
    }
}

impl Widget for EntryList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!("Entries ({}/{})", self.state.hits.len(), self.entries.len());
        let block = Block::bordered()
            .title(title)
            .border_style(self.theme.border(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        let height = inner.height as usize;
        // Cache for handle() — draw always runs before handle()
        self.state.last_height.set(height);

        if self.state.hits.is_empty() {
            let (msg, style) = match self.empty {
                EmptyReason::NoQuery => (
                    format!("{} entries loaded — press / and type to search", self.entries.len()),
                    Style::default().add_modifier(Modifier::DIM),
                ),
                EmptyReason::InvalidQuery => (
                    "invalid pattern — no matches".to_string(),
                    self.theme.error,
                ),
                EmptyReason::NoMatches => ("no matches".to_string(), self.theme.no_matches),
            };
            Paragraph::new(Line::from(Span::styled(msg, style)))
                .wrap(Wrap { trim: true })
                .render(inner, buf);
            return;
        }

        let total = self.state.hits.len();
        let start = self.state.offset.min(total);
        let end = (start + height).min(total);

        let lines: Vec<Line<'static>> = self.state.hits[start..end]
            .iter()
            .enumerate()
            .map(|(row, &index)| {
                let line = render_row(
                    &self.entries[index],
                    self.matcher,
                    self.state.show_variants,
                    self.theme,
                );
                if self.focused && start + row == self.state.cursor {
                    line.patch_style(Style::default().add_modifier(Modifier::REVERSED))
                } else if start + row == self.state.cursor {
                    line.patch_style(Style::default().add_modifier(Modifier::UNDERLINED))
                } else {
                    line
                }
            })
            .collect();

        let text_area = Rect { width: inner.width.saturating_sub(1), ..inner };
        let sb_area = Rect {
            x: inner.right().saturating_sub(1),
            width: 1,
            ..inner
        };

        Paragraph::new(lines).render(text_area, buf);

        let mut sb_state = ScrollbarState::new(total)
            .position(start)
            .viewport_content_length(height);
        StatefulWidget::render(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None),
            sb_area,
            buf,
            &mut sb_state,
        );
    }
}

// ---------------------------------------------------------------------------
// Row rendering
// ---------------------------------------------------------------------------

fn render_row(
    entry: &Entry,
    matcher: Option<&Matcher>,
    show_variants: bool,
    theme: &Theme,
) -> Line<'static> {
    let mut spans = highlight(entry.lexeme_str(), matcher, theme.lexeme, theme.search_highlight);

    if show_variants && !entry.variants.is_empty() {
        spans.push(Span::styled(
            format!(" ({})", entry.variants.join(", ")),
            theme.variant,
        ));
    }

    if let Some(gloss) = entry.first_gloss() {
        spans.push(Span::styled(" │ ", Style::default().add_modifier(Modifier::DIM)));
        spans.extend(highlight(gloss, matcher, theme.gloss, theme.search_highlight));
    }

    Line::from(spans)
}

/// Split `text` into spans, styling the matcher's hits with `hit`.
pub(crate) fn highlight(
    text: &str,
    matcher: Option<&Matcher>,
    base: Style,
    hit: Style,
) -> Vec<Span<'static>> {
    let ranges = matcher.map(|m| m.find_spans(text)).unwrap_or_default();
    let mut spans = Vec::with_capacity(ranges.len() * 2 + 1);
    let mut pos = 0;
    for range in ranges {
        if range.start > pos {
            spans.push(Span::styled(text[pos..range.start].to_string(), base));
        }
        spans.push(Span::styled(text[range.clone()].to_string(), base.patch(hit)));
        pos = range.end;
    }
    if pos < text.len() || spans.is_empty() {
        spans.push(Span::styled(text[pos..].to_string(), base));
    }
    spans
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
