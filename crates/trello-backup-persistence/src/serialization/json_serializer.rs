use serde::Serialize;
use trello_backup_core::{BackupError, BackupResult};

/// Pretty-printed JSON output for backup files
pub struct JsonSerializer;

impl JsonSerializer {
    pub fn to_pretty_bytes<T: Serialize + ?Sized>(data: &T) -> BackupResult<Vec<u8>> {
        let json = serde_json::to_vec_pretty(data)
            .map_err(|e| BackupError::Serialization(e.to_string()))?;
        Ok(json)
    }
}
