use crate::serialization::JsonSerializer;
use serde::Serialize;
use std::path::Path;
use tokio::fs;
use trello_backup_core::{BackupError, BackupResult};

/// Atomic file writer so an interrupted run never leaves a truncated file
/// Uses write-to-temp-file → atomic-rename pattern
pub struct AtomicWriter;

impl AtomicWriter {
    /// Write data to a file atomically, replacing any previous content
    pub async fn write_atomic(path: &Path, data: &[u8]) -> BackupResult<()> {
        // Temp file in the target directory so the rename stays on one filesystem
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        let temp_path = tempfile::NamedTempFile::new_in(parent)?.into_temp_path();

        fs::write(&temp_path, data).await?;
        temp_path
            .persist(path)
            .map_err(|e| BackupError::Io(e.error))?;

        tracing::debug!(
            "Atomically wrote {} bytes to {}",
            data.len(),
            path.display()
        );
        Ok(())
    }

    /// Write a value as pretty-printed JSON
    pub async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> BackupResult<()> {
        let bytes = JsonSerializer::to_pretty_bytes(value)?;
        Self::write_atomic(path, &bytes).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_atomic_write() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("photo.png");
        let data = [0x89, b'P', b'N', b'G', 0x00, 0xff];

        AtomicWriter::write_atomic(&file_path, &data).await.unwrap();

        let read_data = fs::read(&file_path).await.unwrap();
        assert_eq!(read_data, data);
    }

    #[tokio::test]
    async fn test_atomic_write_overwrites() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("attachments.json");

        AtomicWriter::write_atomic(&file_path, b"First")
            .await
            .unwrap();
        AtomicWriter::write_atomic(&file_path, b"Second")
            .await
            .unwrap();

        let read_data = fs::read(&file_path).await.unwrap();
        assert_eq!(read_data, b"Second");
    }

    #[tokio::test]
    async fn test_no_temp_files_left_behind() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("actions.json");

        AtomicWriter::write_json(&file_path, &json!([1, 2, 3]))
            .await
            .unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[tokio::test]
    async fn test_write_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("missing").join("board.json");

        let err = AtomicWriter::write_atomic(&file_path, b"{}").await.unwrap_err();
        assert!(matches!(err, BackupError::Io(_)));
    }
}
