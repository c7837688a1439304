//! Local dictionary files.

use crate::{decode, SourceError, TextSource};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TextSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<String, SourceError> {
        let origin = self.describe();
        tracing::debug!(path = %origin, "reading dictionary file");
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| SourceError::Io { origin: origin.clone(), source })?;
        Ok(decode(bytes, &origin))
    }
}
