//! Header strip — one line naming the open dictionary and the hit count.
//!
//! Keybinding hints (`q:quit  ?:help`) are right-aligned in the same row.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct Header<'a> {
    source: &'a str,
    hits: usize,
    total: usize,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(source: &'a str, hits: usize, total: usize, theme: &'a Theme) -> Self {
        Self { source, hits, total, theme }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(" lexi ", self.theme.border_focused.add_modifier(Modifier::BOLD)),
            Span::raw(self.source.to_string()),
            Span::styled(
                format!("  {}/{} entries", self.hits, self.total),
                Style::default().add_modifier(Modifier::DIM),
            ),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);

        let hint = " q:quit  ?:help ";
        let hint_x = area.right().saturating_sub(hint.len() as u16);
        buf.set_string(
            hint_x,
            area.y,
            hint,
            Style::default().add_modifier(Modifier::DIM),
        );
    }
}
