use crate::domain::model::Entry;
use crate::domain::ports::RosterSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads the roster from a local path — the static resource without the HTTP
/// hop, for pages served straight off the working directory.
#[derive(Debug, Clone)]
pub struct FileRosterSource {
    path: PathBuf,
}

impl FileRosterSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl RosterSource for FileRosterSource {
    async fn fetch_entries(&self) -> Result<Vec<Entry>> {
        tracing::debug!("Reading roster file: {}", self.path.display());
        let data = fs::read(&self.path)?;
        let entries = serde_json::from_slice(&data)?;
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_reads_roster_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": "1", "name": "Alice"}}]"#).unwrap();

        let source = FileRosterSource::new(file.path());
        let entries = source.fetch_entries().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Alice");
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let source = FileRosterSource::new("does/not/exist.txt");
        assert!(source.fetch_entries().await.is_err());
    }

    #[tokio::test]
    async fn test_non_array_document_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"id": "1", "name": "Alice"}}"#).unwrap();

        let source = FileRosterSource::new(file.path());
        assert!(source.fetch_entries().await.is_err());
    }
}
