//! lexi-core — SFM dictionary parsing and wildcard search.
//!
//! # Pipeline
//!
//! ```text
//! raw text ──► reader ──► parser ──► Vec<Entry> ──► query + search ──► &[Entry]
//! ```
//!
//! [`parse`] runs once per dictionary; [`search`] re-runs on every query
//! change against the same parsed entries. Neither keeps state between calls.

pub mod config;
pub mod error;
pub mod parser;
pub mod query;
pub mod reader;
pub mod search;
pub mod types;

pub use error::QueryError;
pub use parser::{parse, parse_with_summary, ParseSummary};
pub use query::{Matcher, Query};
pub use search::{filter, filter_indices, search, search_indices, search_with};
pub use types::{Entry, Sense};
