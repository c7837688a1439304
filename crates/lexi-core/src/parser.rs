//! Entry builder — folds classified tag lines into [`Entry`] records.
//!
//! The builder is an explicit three-state machine:
//!
//! ```text
//!            \lx                 \sn
//!   Idle ─────────► InEntry ─────────► InSense
//!                     ▲  ▲                │ │
//!                     │  └──── \lx ───────┘ │ \sn (flush sense, open next)
//!                     └── \lx (flush) ──────┘
//! ```
//!
//! Sense fields (`\ps \ge \so \sd \de`) are only applied in `InSense`; entry
//! fields (`\va \pdl \pdv`) in either open state. Everything seen while
//! `Idle`, other than `\lx`, is ignored. On every `\lx` and once at end of
//! input the open sense is closed into its entry and the entry is pushed to
//! the output, in that order.

use crate::reader::{self, Tag, TagLine};
use crate::types::{Entry, Sense};

/// Where the builder is between two lines.
#[derive(Debug, Default)]
enum State {
    #[default]
    Idle,
    InEntry(Entry),
    InSense(Entry, Sense),
}

/// Counters gathered during a parse, emitted as a `tracing` event by
/// [`parse`] and returned by [`parse_with_summary`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseSummary {
    /// Non-blank lines read.
    pub lines: usize,
    pub entries: usize,
    pub senses: usize,
    /// Lines whose marker is not in the tag table.
    pub unrecognized: usize,
    /// Known markers dropped because no entry (or no sense) was open.
    pub orphaned: usize,
}

/// Accumulator for one parse call. Never escapes [`parse_with_summary`].
#[derive(Debug, Default)]
struct Builder {
    state: State,
    output: Vec<Entry>,
    summary: ParseSummary,
}

impl Builder {
    fn feed(&mut self, line: &str) {
        self.summary.lines += 1;
        match reader::classify(line) {
            Some(tag_line) => self.apply(tag_line),
            None => self.summary.unrecognized += 1,
        }
    }

    fn apply(&mut self, TagLine { tag, value }: TagLine<'_>) {
        let state = std::mem::take(&mut self.state);
        self.state = match (state, tag) {
            (state, Tag::Lexeme) => {
                self.flush(state);
                State::InEntry(Entry::new(value))
            }

            (State::Idle, _) => {
                self.summary.orphaned += 1;
                State::Idle
            }

            (State::InEntry(entry), Tag::SenseNumber) => State::InSense(entry, Sense::new(value)),
            (State::InSense(mut entry, sense), Tag::SenseNumber) => {
                entry.senses.push(sense);
                self.summary.senses += 1;
                State::InSense(entry, Sense::new(value))
            }

            (State::InEntry(mut entry), tag @ (Tag::Variant | Tag::DialectLabel | Tag::DialectVariant)) => {
                set_entry_field(&mut entry, tag, value);
                State::InEntry(entry)
            }
            (
                State::InSense(mut entry, sense),
                tag @ (Tag::Variant | Tag::DialectLabel | Tag::DialectVariant),
            ) => {
                set_entry_field(&mut entry, tag, value);
                State::InSense(entry, sense)
            }

            (State::InSense(entry, mut sense), tag) => {
                set_sense_field(&mut sense, tag, value);
                State::InSense(entry, sense)
            }

            // Sense field with no open sense.
            (state @ State::InEntry(_), _) => {
                self.summary.orphaned += 1;
                state
            }
        };
    }

    /// Close whatever is open: sense into entry, then entry into output.
    fn flush(&mut self, state: State) {
        let entry = match state {
            State::Idle => return,
            State::InEntry(entry) => entry,
            State::InSense(mut entry, sense) => {
                entry.senses.push(sense);
                self.summary.senses += 1;
                entry
            }
        };
        self.output.push(entry);
        self.summary.entries += 1;
    }

    fn finish(mut self) -> (Vec<Entry>, ParseSummary) {
        let state = std::mem::take(&mut self.state);
        self.flush(state);
        (self.output, self.summary)
    }
}

fn set_entry_field(entry: &mut Entry, tag: Tag, value: &str) {
    match tag {
        Tag::Variant => entry.variants.push(value.to_string()),
        Tag::DialectLabel => entry.primary_dialect_label = Some(value.to_string()),
        Tag::DialectVariant => entry.primary_dialect_variant = Some(value.to_string()),
        _ => unreachable!("{tag} is not an entry field"),
    }
}

fn set_sense_field(sense: &mut Sense, tag: Tag, value: &str) {
    let slot = match tag {
        Tag::PartOfSpeech => &mut sense.part_of_speech,
        Tag::Gloss => &mut sense.gloss,
        Tag::Source => &mut sense.source,
        Tag::SemanticDomain => &mut sense.semantic_domain,
        Tag::Definition => &mut sense.definition,
        _ => unreachable!("{tag} is not a sense field"),
    };
    *slot = Some(value.to_string());
}

/// Parse SFM text into entries, in the order their `\lx` lines appear.
///
/// Never fails: unknown markers and markers with nothing open to attach to
/// are dropped, and empty input gives an empty `Vec`.
pub fn parse(text: &str) -> Vec<Entry> {
    let (entries, summary) = parse_with_summary(text);
    tracing::debug!(
        lines = summary.lines,
        entries = summary.entries,
        senses = summary.senses,
        unrecognized = summary.unrecognized,
        orphaned = summary.orphaned,
        "parsed dictionary"
    );
    entries
}

/// Like [`parse`], also returning the line and record counters.
pub fn parse_with_summary(text: &str) -> (Vec<Entry>, ParseSummary) {
    reader::lines(text)
        .fold(Builder::default(), |mut builder, line| {
            builder.feed(line);
            builder
        })
        .finish()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
