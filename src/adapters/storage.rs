use crate::core::Storage;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Filesystem storage rooted at `base_path`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let data = tokio::fs::read(self.resolve(path)).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&full_path, data).await?;
        tracing::debug!("Wrote {} bytes to {}", data.len(), full_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::write_lines;
    use crate::utils::error::HrError;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_lines_creates_parents_and_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        let first = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        write_lines(&storage, "nested/dir/report.txt", &first).await.unwrap();

        let second = vec!["only".to_string()];
        write_lines(&storage, "nested/dir/report.txt", &second).await.unwrap();

        let content = storage.read_file("nested/dir/report.txt").await.unwrap();
        assert_eq!(String::from_utf8(content).unwrap(), "only\n");
    }

    #[tokio::test]
    async fn test_write_into_file_path_fails_with_io_error() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("blocker"), b"x").unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        let err = write_lines(&storage, "blocker/report.txt", &["x".to_string()])
            .await
            .unwrap_err();
        assert!(matches!(err, HrError::IoError(_)));
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());
        assert!(storage.read_file("missing.txt").await.is_err());
    }
}
