pub mod config;
pub mod error;
pub mod logging;
pub mod result;

pub use config::Credentials;
pub use error::{redact_url, BackupError};
pub use result::BackupResult;
