//! Query compiler — turns a user-typed wildcard pattern into a [`Matcher`].
//!
//! Every `*` becomes `.*`; nothing else is escaped, so the rest of the query
//! is regular-expression syntax (`^cat`, `(a|e)`, `colou?r` all work). Matching
//! is case-insensitive and unanchored.

use crate::config::SearchConfig;
use crate::error::QueryError;
use regex::{Regex, RegexBuilder};
use std::ops::Range;

/// A compiled query.
#[derive(Debug, Clone)]
pub enum Query {
    /// The empty query. Matches nothing and is never run against entries.
    Empty,
    Pattern(Matcher),
}

impl Query {
    /// Compile with the default [`SearchConfig`].
    pub fn compile(raw: &str) -> Result<Query, QueryError> {
        Self::compile_with(raw, &SearchConfig::default())
    }

    pub fn compile_with(raw: &str, config: &SearchConfig) -> Result<Query, QueryError> {
        if raw.is_empty() {
            return Ok(Query::Empty);
        }
        Matcher::new(raw, config).map(Query::Pattern)
    }

    pub fn matcher(&self) -> Option<&Matcher> {
        match self {
            Query::Empty => None,
            Query::Pattern(m) => Some(m),
        }
    }
}

/// Case-insensitive tester for a single field value.
#[derive(Debug, Clone)]
pub struct Matcher {
    regex: Regex,
}

impl Matcher {
    fn new(raw: &str, config: &SearchConfig) -> Result<Self, QueryError> {
        let pattern = wildcard_to_regex(raw);
        RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .size_limit(config.regex_size_limit)
            .build()
            .map(|regex| Self { regex })
            .map_err(|source| QueryError::InvalidPattern { pattern, source })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Byte ranges of every non-empty match in `text`, left to right.
    pub fn find_spans(&self, text: &str) -> Vec<Range<usize>> {
        self.regex
            .find_iter(text)
            .filter(|m| !m.is_empty())
            .map(|m| m.range())
            .collect()
    }

    /// The regular expression the query was translated to.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// Replace every literal `*` with `.*`.
pub fn wildcard_to_regex(raw: &str) -> String {
    raw.replace('*', ".*")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
