//! Export pipeline: boards → cards → actions and attachments.
//!
//! Runs strictly sequentially. Every failure aborts the run; nothing already
//! written is cleaned up.

pub mod board;
pub mod card;
pub mod models;

pub use board::{list_boards, BoardExporter};
pub use card::{CardExporter, COMMENT_FETCH_DELAY};
pub use models::{BoardSummary, CardSummary, ExportOptions};
