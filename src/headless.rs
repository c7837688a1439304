//! Headless renderer — one search, printed to stdout, no terminal UI.
//!
//! The empty-result case is explicit in every format: `text` says
//! `no matches` on stderr, `json` prints `[]`, `jsonl` prints nothing.

use crate::cli::Format;
use lexi_core::{config::SearchConfig, search_with, Entry, Sense};
use std::io::{self, Write};

/// Search `entries` once and print the hits.
pub fn run<W: Write, E: Write>(
    entries: &[Entry],
    query: &str,
    format: Format,
    count: bool,
    search: &SearchConfig,
    out: &mut W,
    err: &mut E,
) -> io::Result<()> {
    let hits = search_with(query, entries, search);
    tracing::debug!(query, hits = hits.len(), total = entries.len(), "headless search");

    if count {
        return writeln!(out, "{}", hits.len());
    }

    match format {
        Format::Text if hits.is_empty() => writeln!(err, "no matches")?,
        Format::Text => {
            for (i, entry) in hits.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                write_text(out, entry)?;
            }
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, &hits)?;
            writeln!(out)?;
        }
        Format::Jsonl => {
            for entry in &hits {
                serde_json::to_writer(&mut *out, entry)?;
                writeln!(out)?;
            }
        }
    }
    out.flush()
}

fn write_text<W: Write>(out: &mut W, entry: &Entry) -> io::Result<()> {
    writeln!(out, "{}", entry.lexeme_str())?;
    if !entry.variants.is_empty() {
        writeln!(out, "  variants: {}", entry.variants.join(", "))?;
    }
    match (&entry.primary_dialect_label, &entry.primary_dialect_variant) {
        (Some(label), Some(variant)) => writeln!(out, "  dialect: {label}: {variant}")?,
        (Some(label), None) => writeln!(out, "  dialect: {label}")?,
        (None, Some(variant)) => writeln!(out, "  dialect form: {variant}")?,
        (None, None) => {}
    }
    for sense in &entry.senses {
        write_sense(out, sense)?;
    }
    Ok(())
}

fn write_sense<W: Write>(out: &mut W, sense: &Sense) -> io::Result<()> {
    write!(out, "  {}.", sense.sense_number)?;
    if let Some(ps) = &sense.part_of_speech {
        write!(out, " ({ps})")?;
    }
    if let Some(gloss) = &sense.gloss {
        write!(out, " {gloss}")?;
    }
    writeln!(out)?;
    if let Some(definition) = &sense.definition {
        writeln!(out, "     {definition}")?;
    }
    if let Some(domain) = &sense.semantic_domain {
        writeln!(out, "     domain: {domain}")?;
    }
    if let Some(source) = &sense.source {
        writeln!(out, "     source: {source}")?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
