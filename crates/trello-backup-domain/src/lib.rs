pub mod api;
pub mod layout;
pub mod models;
pub mod sanitize;

pub use api::{resources, ApiQuery, TrelloApi};
#[cfg(feature = "mock")]
pub use api::MockTrelloApi;
pub use layout::{BackupLayout, EntryNames};
pub use models::{Attachment, Badges, Board, BoardRef, Card};
pub use sanitize::sanitize_filename;
