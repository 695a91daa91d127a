//! Export options and per-board/per-card results.

use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Inline the board's action log into the board payload.
    pub with_actions: bool,
    /// Only export these board ids. Empty means every board.
    pub board_ids: Vec<String>,
}

impl ExportOptions {
    pub fn includes(&self, board_id: &str) -> bool {
        self.board_ids.is_empty() || self.board_ids.iter().any(|id| id == board_id)
    }
}

/// What was written for one card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardSummary {
    pub directory: Option<PathBuf>,
    pub uploads_downloaded: usize,
}

impl CardSummary {
    pub fn wrote_files(&self) -> bool {
        self.directory.is_some()
    }
}

/// What was written for one board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSummary {
    pub id: String,
    pub name: String,
    pub file: PathBuf,
    pub directory: PathBuf,
    pub cards: usize,
    pub card_directories: usize,
    pub uploads_downloaded: usize,
}
