//! Search filter — runs a compiled [`Query`] over parsed entries.
//!
//! An entry matches when its lexeme matches, or when any of its senses has a
//! gloss or definition that matches. Results keep the input order; there is
//! no ranking and no deduplication.
//!
//! Nothing here fails: an empty query and an invalid pattern both produce an
//! empty result, and entries without a lexeme are logged and skipped.

use crate::config::SearchConfig;
use crate::query::{Matcher, Query};
use crate::types::Entry;

/// Compile `query` with default settings and return the matching entries.
pub fn search<'a>(query: &str, entries: &'a [Entry]) -> Vec<&'a Entry> {
    search_with(query, entries, &SearchConfig::default())
}

pub fn search_with<'a>(query: &str, entries: &'a [Entry], config: &SearchConfig) -> Vec<&'a Entry> {
    search_indices(query, entries, config)
        .into_iter()
        .map(|i| &entries[i])
        .collect()
}

/// Positions in `entries` of every match, ascending.
///
/// For callers that own the entries elsewhere and only want to remember
/// which ones are visible (the TUI keeps these between keystrokes).
pub fn search_indices(query: &str, entries: &[Entry], config: &SearchConfig) -> Vec<usize> {
    let compiled = match Query::compile_with(query, config) {
        Ok(compiled) => compiled,
        Err(err) => {
            tracing::warn!(query, error = %err, "search pattern rejected");
            return Vec::new();
        }
    };

    let Some(matcher) = compiled.matcher() else {
        return Vec::new();
    };

    let hits = filter_indices(matcher, entries);
    tracing::debug!(query, pattern = matcher.as_str(), hits = hits.len(), total = entries.len(), "search");
    hits
}

/// Apply an already compiled matcher.
pub fn filter<'a>(matcher: &Matcher, entries: &'a [Entry]) -> Vec<&'a Entry> {
    filter_indices(matcher, entries)
        .into_iter()
        .map(|i| &entries[i])
        .collect()
}

pub fn filter_indices(matcher: &Matcher, entries: &[Entry]) -> Vec<usize> {
    entries
        .iter()
        .enumerate()
        .filter(|(i, entry)| entry_matches(matcher, *i, entry))
        .map(|(i, _)| i)
        .collect()
}

fn entry_matches(matcher: &Matcher, index: usize, entry: &Entry) -> bool {
    let Some(lexeme) = entry.lexeme.as_deref() else {
        tracing::error!(index, senses = entry.senses.len(), "entry has no lexeme; excluded from results");
        return false;
    };

    matcher.is_match(lexeme)
        || entry.senses.iter().any(|sense| {
            [sense.gloss.as_deref(), sense.definition.as_deref()]
                .into_iter()
                .flatten()
                .any(|text| matcher.is_match(text))
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
