//! lexi-sources — where dictionary text comes from.
//!
//! Each source produces the whole dictionary as one `String`. [`load`] turns
//! that into parsed entries and swallows retrieval failures: a source that
//! cannot be read is logged and yields an empty dictionary.

pub mod error;
pub mod file;
pub mod http;
pub mod stdin;

use lexi_core::Entry;
use std::future::Future;
use std::time::Duration;

pub use error::SourceError;
pub use file::FileSource;
pub use http::HttpSource;
pub use stdin::StdinSource;

/// Anything that can hand over a complete dictionary payload.
pub trait TextSource: Send + Sync {
    /// Human-readable name for headers and log lines.
    fn describe(&self) -> String;

    fn fetch(&self) -> impl Future<Output = Result<String, SourceError>> + Send;
}

/// The source selected on the command line or in `[source] default`.
#[derive(Debug, Clone)]
pub enum Source {
    File(FileSource),
    Stdin(StdinSource),
    Http(HttpSource),
}

impl Source {
    /// `-` reads stdin, `http://…` is fetched, anything else is a file path.
    pub fn parse(location: &str, http_timeout: Duration) -> Result<Self, SourceError> {
        let location = location.trim();
        if location == "-" {
            return Ok(Source::Stdin(StdinSource));
        }
        if let Some((scheme, _)) = location.split_once("://") {
            return match scheme.to_ascii_lowercase().as_str() {
                "http" => Ok(Source::Http(HttpSource::new(location, http_timeout)?)),
                "file" => Ok(Source::File(FileSource::new(&location["file://".len()..]))),
                other => Err(SourceError::UnsupportedScheme(other.to_string())),
            };
        }
        Ok(Source::File(FileSource::new(location)))
    }
}

impl TextSource for Source {
    fn describe(&self) -> String {
        match self {
            Source::File(s) => s.describe(),
            Source::Stdin(s) => s.describe(),
            Source::Http(s) => s.describe(),
        }
    }

    async fn fetch(&self) -> Result<String, SourceError> {
        match self {
            Source::File(s) => s.fetch().await,
            Source::Stdin(s) => s.fetch().await,
            Source::Http(s) => s.fetch().await,
        }
    }
}

/// Fetch and parse. Retrieval failures are logged and give an empty `Vec`.
pub async fn load<S: TextSource>(source: &S) -> Vec<Entry> {
    let name = source.describe();
    match source.fetch().await {
        Ok(text) => {
            let entries = lexi_core::parse(&text);
            tracing::info!(source = %name, bytes = text.len(), entries = entries.len(), "dictionary loaded");
            entries
        }
        Err(err) => {
            tracing::error!(source = %name, error = %err, "could not read dictionary; continuing with no entries");
            Vec::new()
        }
    }
}

/// Decode a payload as UTF-8, replacing invalid sequences.
pub(crate) fn decode(bytes: Vec<u8>, origin: &str) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(source = origin, valid_up_to = err.utf8_error().valid_up_to(), "payload is not valid UTF-8; invalid bytes replaced");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
