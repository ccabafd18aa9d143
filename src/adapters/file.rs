use crate::domain::ports::CatalogSource;
use crate::utils::error::{CatalogError, Result, MISSING_FILE};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct LocalCatalogFile {
    path: PathBuf,
}

impl LocalCatalogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for LocalCatalogFile {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<u8>> {
        tracing::debug!("Reading catalog file {}", self.path.display());
        tokio::fs::read(&self.path).await.map_err(|e| {
            let reason = match e.kind() {
                ErrorKind::NotFound => MISSING_FILE.to_string(),
                _ => e.to_string(),
            };
            CatalogError::CatalogUnavailable {
                source_name: self.describe(),
                reason,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_reads_existing_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[]").unwrap();

        let source = LocalCatalogFile::new(file.path());
        assert_eq!(source.fetch().await.unwrap(), b"[]");
    }

    #[tokio::test]
    async fn test_missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let source = LocalCatalogFile::new(dir.path().join("cups_limpio.json"));

        match source.fetch().await {
            Err(CatalogError::CatalogUnavailable { reason, .. }) => assert_eq!(reason, MISSING_FILE),
            other => panic!("expected CatalogUnavailable, got {:?}", other),
        }
    }
}
