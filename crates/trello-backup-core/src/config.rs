use crate::error::BackupError;
use crate::result::BackupResult;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

pub const DEFAULT_API_BASE_URL: &str = "https://api.trello.com/1/";

const CONFIG_FILE_NAME: &str = ".trello_backup.yml";

/// API credentials read from `~/.trello_backup.yml`.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    pub developer_public_key: String,
    pub member_token: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Credentials {
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME))
    }

    /// Loads and validates the credentials file. Every failure is fatal for a run.
    pub fn load(path: &Path) -> BackupResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| BackupError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let credentials = Self::parse(&content).map_err(|message| BackupError::Config {
            path: path.to_path_buf(),
            message,
        })?;

        tracing::debug!("Loaded credentials from {}", path.display());
        Ok(credentials)
    }

    fn parse(content: &str) -> Result<Self, String> {
        let mut credentials: Self = serde_yaml::from_str(content).map_err(|e| e.to_string())?;

        if credentials.developer_public_key.trim().is_empty() {
            return Err("developer_public_key is empty".to_string());
        }
        if credentials.member_token.trim().is_empty() {
            return Err("member_token is empty".to_string());
        }
        if !credentials.api_base_url.ends_with('/') {
            credentials.api_base_url.push('/');
        }

        Ok(credentials)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("developer_public_key", &"***")
            .field("member_token", &"***")
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_valid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("trello_backup.yml");
        std::fs::write(&path, "developer_public_key: abc\nmember_token: def\n").unwrap();

        let credentials = Credentials::load(&path).unwrap();
        assert_eq!(credentials.developer_public_key, "abc");
        assert_eq!(credentials.member_token, "def");
        assert_eq!(credentials.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let credentials = Credentials::parse(
            "developer_public_key: abc\nmember_token: def\napi_base_url: http://localhost:9000/1\n",
        )
        .unwrap();
        assert_eq!(credentials.api_base_url, "http://localhost:9000/1/");
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.yml");

        let err = Credentials::load(&path).unwrap_err();
        assert!(matches!(err, BackupError::Config { .. }));
        assert!(err.to_string().contains("missing.yml"));
    }

    #[test]
    fn test_missing_token_is_rejected() {
        let err = Credentials::parse("developer_public_key: abc\n").unwrap_err();
        assert!(err.contains("member_token"));
    }

    #[test]
    fn test_blank_key_is_rejected() {
        let err = Credentials::parse("developer_public_key: '  '\nmember_token: def\n").unwrap_err();
        assert_eq!(err, "developer_public_key is empty");
    }

    #[test]
    fn test_debug_hides_secrets() {
        let credentials =
            Credentials::parse("developer_public_key: abc\nmember_token: supersecret\n").unwrap();
        let debug = format!("{:?}", credentials);
        assert!(!debug.contains("supersecret"));
        assert!(!debug.contains("abc"));
    }
}
