use reqwest::Url;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackupError {
    #[error("Config error in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("Request for {resource} failed with HTTP status {status}")]
    Http { resource: String, status: u16 },

    #[error("Request for {resource} failed: {message}")]
    Transport { resource: String, message: String },

    #[error("Invalid JSON from {resource}: {message}")]
    Decode { resource: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Refusing to overwrite existing directory {}", path.display())]
    AlreadyExists { path: PathBuf },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{context}: {inner}")]
    Export {
        context: String,
        inner: Box<BackupError>,
    },
}

impl BackupError {
    /// Wraps an error with the board or card it occurred under.
    pub fn within(self, context: impl Into<String>) -> Self {
        Self::Export {
            context: context.into(),
            inner: Box::new(self),
        }
    }

    /// The error underneath any board or card context.
    pub fn root_cause(&self) -> &BackupError {
        match self {
            Self::Export { inner, .. } => inner.root_cause(),
            other => other,
        }
    }
}

const SECRET_PARAMS: [&str; 2] = ["key", "token"];

/// Masks credential query parameters so a URL can be logged or shown in errors.
///
/// Input that does not parse as an absolute URL is returned unchanged.
pub fn redact_url(url: &str) -> String {
    let Ok(mut parsed) = Url::parse(url) else {
        return url.to_string();
    };
    if parsed.query().is_none() {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = parsed
        .query_pairs()
        .map(|(name, value)| {
            let value = if SECRET_PARAMS.contains(&name.as_ref()) {
                "***".to_string()
            } else {
                value.into_owned()
            };
            (name.into_owned(), value)
        })
        .collect();
    parsed.query_pairs_mut().clear().extend_pairs(pairs);

    parsed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_url_masks_credentials() {
        let url = "https://api.trello.com/1/boards/b1?cards=all&key=abc&token=secret";
        assert_eq!(
            redact_url(url),
            "https://api.trello.com/1/boards/b1?cards=all&key=***&token=***"
        );
    }

    #[test]
    fn test_redact_url_without_query() {
        let url = "https://trello-attachments.s3.amazonaws.com/x";
        assert_eq!(redact_url(url), url);
    }

    #[test]
    fn test_redact_url_masks_encoded_credentials() {
        let url = "http://127.0.0.1:8080/1/members/me/boards?key=a%2Fb&token=t%20k";
        assert_eq!(
            redact_url(url),
            "http://127.0.0.1:8080/1/members/me/boards?key=***&token=***"
        );
    }

    #[test]
    fn test_redact_url_leaves_relative_paths_alone() {
        assert_eq!(redact_url("cards/c1/actions"), "cards/c1/actions");
    }

    #[test]
    fn test_http_error_message_names_resource() {
        let err = BackupError::Http {
            resource: "cards/c1/actions".to_string(),
            status: 401,
        };
        assert_eq!(
            err.to_string(),
            "Request for cards/c1/actions failed with HTTP status 401"
        );
    }

    #[test]
    fn test_within_prefixes_context() {
        let err = BackupError::AlreadyExists {
            path: PathBuf::from("out/Demo"),
        }
        .within("board b1");
        assert_eq!(
            err.to_string(),
            "board b1: Refusing to overwrite existing directory out/Demo"
        );
    }

    #[test]
    fn test_root_cause_unwraps_nested_context() {
        let err = BackupError::Http {
            resource: "cards/c1/attachments".to_string(),
            status: 429,
        }
        .within("card c1")
        .within("board b1");

        assert!(matches!(err.root_cause(), BackupError::Http { status: 429, .. }));
        assert_eq!(
            err.to_string(),
            "board b1: card c1: Request for cards/c1/attachments failed with HTTP status 429"
        );
    }
}
