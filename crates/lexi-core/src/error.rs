//! Error types for lexi-core.
//!
//! Parsing never fails and search degrades to "no results", so the only
//! error a caller can observe is a query that does not compile.

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("invalid search pattern {pattern:?}: {source}")]
    InvalidPattern {
        /// The translated pattern handed to the regex engine.
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
