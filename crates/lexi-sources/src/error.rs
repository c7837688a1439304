use std::time::Duration;

/// Why a dictionary could not be retrieved.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("error reading {origin}: {source}")]
    Io {
        origin: String,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported URL scheme {0:?} (only http:// is fetched)")]
    UnsupportedScheme(String),
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: hyper::http::uri::InvalidUri,
    },
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: hyper_util::client::legacy::Error,
    },
    #[error("{url} answered {status}")]
    Status {
        url: String,
        status: hyper::StatusCode,
    },
    #[error("error reading response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: hyper::Error,
    },
    #[error("{url} did not answer within {timeout:?}")]
    Timeout { url: String, timeout: Duration },
}
