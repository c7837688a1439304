//! Dictionary piped on standard input (`lexi -`).

use crate::{decode, SourceError, TextSource};
use tokio::io::AsyncReadExt;

/// Reads stdin to EOF.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StdinSource;

impl TextSource for StdinSource {
    fn describe(&self) -> String {
        "<stdin>".to_string()
    }

    async fn fetch(&self) -> Result<String, SourceError> {
        let mut bytes = Vec::new();
        tokio::io::stdin()
            .read_to_end(&mut bytes)
            .await
            .map_err(|source| SourceError::Io {
                origin: self.describe(),
                source,
            })?;
        tracing::debug!(bytes = bytes.len(), "read dictionary from stdin");
        Ok(decode(bytes, "<stdin>"))
    }
}
