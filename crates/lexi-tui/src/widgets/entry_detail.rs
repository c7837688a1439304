//! Detail pane — every field of the selected entry, sense by sense.
//!
//! `↑`/`↓` scroll the pane when it is focused; the scroll resets whenever the
//! selection changes.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use crate::widgets::entry_list::highlight;
use lexi_core::{Entry, Matcher, Sense};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

const PAGE_STEP: u16 = 10;

#[derive(Debug, Default)]
pub struct EntryDetailState {
    /// Lines scrolled off the top.
    pub scroll: u16,
}

impl EntryDetailState {
    pub fn handle(&mut self, event: &AppEvent) {
        self.scroll = match event {
            AppEvent::Nav(Direction::Up) => self.scroll.saturating_sub(1),
            AppEvent::Nav(Direction::Down) => self.scroll.saturating_add(1),
            AppEvent::ScrollUp => self.scroll.saturating_sub(PAGE_STEP),
            AppEvent::ScrollDown => self.scroll.saturating_add(PAGE_STEP),
            AppEvent::ScrollToTop => 0,
            _ => return,
        };
    }

    pub fn reset(&mut self) {
        self.scroll = 0;
    }
}

/// Display toggles for the detail pane, from `[ui]` config and `:` commands.
#[derive(Debug, Clone, Copy)]
pub struct DetailOptions {
    pub show_variants: bool,
    pub show_dialect: bool,
}

pub struct EntryDetail<'a> {
    entry: Option<&'a Entry>,
    state: &'a EntryDetailState,
    matcher: Option<&'a Matcher>,
    options: DetailOptions,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> EntryDetail<'a> {
    pub fn new(
        entry: Option<&'a Entry>,
        state: &'a EntryDetailState,
        matcher: Option<&'a Matcher>,
        options: DetailOptions,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self { entry, state, matcher, options, focused, theme }
    }
}

impl Widget for EntryDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title("Entry")
            .border_style(self.theme.border(self.focused));

        let lines = match self.entry {
            Some(entry) => detail_lines(entry, self.matcher, self.options, self.theme),
            None => vec![Line::from(Span::styled(
                "nothing selected",
                Style::default().add_modifier(Modifier::DIM),
            ))],
        };

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.state.scroll, 0))
            .render(area, buf);
    }
}

pub(crate) fn detail_lines(
    entry: &Entry,
    matcher: Option<&Matcher>,
    options: DetailOptions,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(highlight(
        entry.lexeme_str(),
        matcher,
        theme.lexeme,
        theme.search_highlight,
    ))];

    if options.show_variants && !entry.variants.is_empty() {
        lines.push(labelled("variants", entry.variants.join(", "), theme.variant));
    }

    if options.show_dialect {
        match (&entry.primary_dialect_label, &entry.primary_dialect_variant) {
            (Some(label), Some(variant)) => {
                lines.push(labelled("dialect", format!("{label}: {variant}"), theme.dialect))
            }
            (Some(label), None) => lines.push(labelled("dialect", label.clone(), theme.dialect)),
            (None, Some(variant)) => {
                lines.push(labelled("dialect form", variant.clone(), theme.dialect))
            }
            (None, None) => {}
        }
    }

    for sense in &entry.senses {
        lines.push(Line::raw(""));
        lines.extend(sense_lines(sense, matcher, theme));
    }

    lines
}

fn sense_lines(sense: &Sense, matcher: Option<&Matcher>, theme: &Theme) -> Vec<Line<'static>> {
    let mut head = vec![Span::styled(format!("{}.", sense.sense_number), theme.sense_number)];
    if let Some(ps) = &sense.part_of_speech {
        head.push(Span::raw(" "));
        head.push(Span::styled(ps.clone(), theme.part_of_speech));
    }
    if let Some(gloss) = &sense.gloss {
        head.push(Span::raw(" "));
        head.extend(highlight(gloss, matcher, theme.gloss, theme.search_highlight));
    }

    let mut lines = vec![Line::from(head)];

    if let Some(definition) = &sense.definition {
        let mut spans = vec![Span::raw("   ")];
        spans.extend(highlight(definition, matcher, theme.definition, theme.search_highlight));
        lines.push(Line::from(spans));
    }
    if let Some(domain) = &sense.semantic_domain {
        lines.push(indented_meta("domain", domain, theme));
    }
    if let Some(source) = &sense.source {
        lines.push(indented_meta("source", source, theme));
    }
    lines
}

fn labelled(label: &str, value: String, style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().add_modifier(Modifier::DIM)),
        Span::styled(value, style),
    ])
}

fn indented_meta(label: &str, value: &str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(format!("   {label}: {value}"), theme.meta))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
