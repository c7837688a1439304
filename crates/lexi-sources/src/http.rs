//! Dictionaries served over plain HTTP, e.g. a static file next to a web page.
//!
//! One `GET`, whole body buffered, bounded by a timeout that covers both the
//! response head and the body. Only `2xx` answers count as success.

use crate::{decode, SourceError, TextSource};
use http_body_util::{BodyExt, Empty};
use hyper::body::Bytes;
use hyper::Uri;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    uri: Uri,
    timeout: Duration,
}

impl HttpSource {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, SourceError> {
        let uri = url.parse::<Uri>().map_err(|source| SourceError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        Ok(Self {
            url: url.to_string(),
            uri,
            timeout,
        })
    }

    async fn get(&self) -> Result<String, SourceError> {
        let client: Client<_, Empty<Bytes>> = Client::builder(TokioExecutor::new()).build_http();

        let response = client
            .get(self.uri.clone())
            .await
            .map_err(|source| SourceError::Request {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        tracing::debug!(url = %self.url, %status, "dictionary response");
        if !status.is_success() {
            return Err(SourceError::Status {
                url: self.url.clone(),
                status,
            });
        }

        let body = response
            .into_body()
            .collect()
            .await
            .map_err(|source| SourceError::Body {
                url: self.url.clone(),
                source,
            })?
            .to_bytes();

        Ok(decode(body.to_vec(), &self.url))
    }
}

impl TextSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<String, SourceError> {
        tokio::time::timeout(self.timeout, self.get())
            .await
            .map_err(|_| SourceError::Timeout {
                url: self.url.clone(),
                timeout: self.timeout,
            })?
    }
}
