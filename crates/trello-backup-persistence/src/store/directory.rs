use std::io::ErrorKind;
use std::path::Path;
use trello_backup_core::{BackupError, BackupResult};

/// How an output directory that already exists is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryPolicy {
    /// The directory must not exist yet; its parent must
    Strict,
    /// Create the directory and any missing parents, accept an existing one
    CreateIfMissing,
}

pub async fn create_dir(path: &Path, policy: DirectoryPolicy) -> BackupResult<()> {
    match policy {
        DirectoryPolicy::Strict => match tokio::fs::create_dir(path).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(BackupError::AlreadyExists {
                    path: path.to_path_buf(),
                });
            }
            Err(e) => return Err(e.into()),
        },
        DirectoryPolicy::CreateIfMissing => tokio::fs::create_dir_all(path).await?,
    }

    tracing::debug!("Created directory {} ({:?})", path.display(), policy);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_strict_creates_new_directory() {
        let dir = tempdir().unwrap();
        let board_dir = dir.path().join("Demo-Board");

        create_dir(&board_dir, DirectoryPolicy::Strict).await.unwrap();
        assert!(board_dir.is_dir());
    }

    #[tokio::test]
    async fn test_strict_refuses_existing_directory() {
        let dir = tempdir().unwrap();
        let board_dir = dir.path().join("Demo-Board");
        std::fs::create_dir(&board_dir).unwrap();

        let err = create_dir(&board_dir, DirectoryPolicy::Strict)
            .await
            .unwrap_err();
        match err {
            BackupError::AlreadyExists { path } => assert_eq!(path, board_dir),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_strict_does_not_create_parents() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        let err = create_dir(&nested, DirectoryPolicy::Strict)
            .await
            .unwrap_err();
        assert!(matches!(err, BackupError::Io(_)));
    }

    #[tokio::test]
    async fn test_create_if_missing_is_idempotent() {
        let dir = tempdir().unwrap();
        let card_dir = dir.path().join("Demo-Board").join("Card A");

        create_dir(&card_dir, DirectoryPolicy::CreateIfMissing)
            .await
            .unwrap();
        create_dir(&card_dir, DirectoryPolicy::CreateIfMissing)
            .await
            .unwrap();
        assert!(card_dir.is_dir());
    }
}
