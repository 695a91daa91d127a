//! Output paths of a backup run.
//!
//! ```text
//! {root}/
//! ├── {board}.json                 # full board payload
//! └── {board}/
//!     └── {card}/
//!         ├── actions.json         # comment history
//!         ├── attachments.json     # attachment metadata
//!         └── {attachment}         # uploaded attachment content
//! ```
//!
//! Every name segment goes through [`sanitize_filename`]. Card and
//! attachment names are claimed through [`EntryNames`] so two entries of one
//! directory never share a path.

use crate::sanitize::sanitize_filename;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub const ACTIONS_FILE: &str = "actions.json";
pub const ATTACHMENTS_FILE: &str = "attachments.json";

#[derive(Debug, Clone)]
pub struct BackupLayout {
    root: PathBuf,
}

impl BackupLayout {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn board_dir(&self, board_name: &str) -> PathBuf {
        self.root.join(sanitize_filename(board_name))
    }

    /// Sibling of [`Self::board_dir`], not inside it.
    pub fn board_file(&self, board_name: &str) -> PathBuf {
        self.root.join(format!("{}.json", sanitize_filename(board_name)))
    }

    /// `entry` is a name handed out by [`EntryNames::card`].
    pub fn card_dir(board_dir: &Path, entry: &str) -> PathBuf {
        board_dir.join(entry)
    }

    pub fn actions_file(card_dir: &Path) -> PathBuf {
        card_dir.join(ACTIONS_FILE)
    }

    pub fn attachments_file(card_dir: &Path) -> PathBuf {
        card_dir.join(ATTACHMENTS_FILE)
    }

    /// `entry` is a name handed out by [`EntryNames::attachment`].
    pub fn attachment_file(card_dir: &Path, entry: &str) -> PathBuf {
        card_dir.join(entry)
    }
}

/// Names already taken inside one directory.
///
/// Comparison ignores case, so the same backup stays collision-free on
/// case-insensitive filesystems.
#[derive(Debug, Default)]
pub struct EntryNames {
    taken: HashSet<String>,
}

impl EntryNames {
    /// Registry for the card directories of one board.
    pub fn for_board() -> Self {
        Self::default()
    }

    /// Registry for one card directory; the metadata files are reserved.
    pub fn for_card() -> Self {
        let mut names = Self::default();
        names.taken.insert(ACTIONS_FILE.to_string());
        names.taken.insert(ATTACHMENTS_FILE.to_string());
        names
    }

    /// `{name}` for the first card of that name, `{name} ({id})` for later ones.
    pub fn card(&mut self, name: &str, id: &str) -> String {
        let base = sanitize_filename(name);
        let fallback = sanitize_filename(&format!("{base} ({id})"));
        self.claim(base, fallback)
    }

    /// `{name}` for the first upload of that name, `{id}-{name}` for later ones.
    pub fn attachment(&mut self, name: &str, id: &str) -> String {
        let base = sanitize_filename(name);
        let fallback = sanitize_filename(&format!("{id}-{base}"));
        self.claim(base, fallback)
    }

    fn claim(&mut self, preferred: String, fallback: String) -> String {
        if self.taken.insert(preferred.to_lowercase()) {
            return preferred;
        }

        // Ids are unique, but a literal name can still match a fallback.
        let mut candidate = fallback.clone();
        let mut n = 2;
        while !self.taken.insert(candidate.to_lowercase()) {
            candidate = format!("{fallback} {n}");
            n += 1;
        }
        candidate
    }
}
