//! Typed views of Trello API responses.
//!
//! Only the fields the exporter reads are modeled. Responses are written to
//! disk from the raw JSON value, so nothing else is lost by ignoring them.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use trello_backup_core::{BackupError, BackupResult};

/// Entry of `members/me/boards`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardRef {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Full board payload as returned by `boards/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Board {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Card {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub badges: Badges,
}

/// Summary counters Trello keeps on every card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Badges {
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub attachments: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Attachment {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(rename = "isUpload", default)]
    pub is_upload: bool,
}

impl Card {
    pub fn has_comments(&self) -> bool {
        self.badges.comments != 0
    }

    pub fn has_attachments(&self) -> bool {
        self.badges.attachments != 0
    }
}

/// Reads a typed view out of a raw response without consuming it.
pub fn decode<T: DeserializeOwned>(resource: &str, value: &Value) -> BackupResult<T> {
    T::deserialize(value).map_err(|e| BackupError::Decode {
        resource: resource.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_board_ignores_unmodeled_fields() {
        let value = json!({
            "id": "b1",
            "name": "Demo",
            "desc": "ignored",
            "lists": [{"id": "l1"}],
            "cards": [
                {"id": "c1", "name": "Card A", "idList": "l1", "badges": {"comments": 2, "attachments": 0, "votes": 7}}
            ]
        });

        let board: Board = decode("boards/b1", &value).unwrap();
        assert_eq!(board.id, "b1");
        assert_eq!(board.cards.len(), 1);
        assert_eq!(board.cards[0].badges.comments, 2);
        assert!(board.cards[0].has_comments());
        assert!(!board.cards[0].has_attachments());
    }

    #[test]
    fn test_decode_board_without_cards() {
        let board: Board = decode("boards/b1", &json!({"id": "b1", "name": "Empty"})).unwrap();
        assert!(board.cards.is_empty());
    }

    #[test]
    fn test_card_without_badges_has_nothing_to_fetch() {
        let card: Card = decode("boards/b1", &json!({"id": "c1", "name": "Bare"})).unwrap();
        assert_eq!(card.badges, Badges::default());
        assert!(!card.has_comments());
        assert!(!card.has_attachments());
    }

    #[test]
    fn test_decode_attachment_upload_flag() {
        let attachments: Vec<Attachment> = decode(
            "cards/c1/attachments",
            &json!([
                {"id": "a1", "name": "photo.png", "url": "https://x/photo.png", "isUpload": true},
                {"id": "a2", "name": "link", "url": "https://example.com"}
            ]),
        )
        .unwrap();

        assert!(attachments[0].is_upload);
        assert!(!attachments[1].is_upload);
    }

    #[test]
    fn test_decode_error_names_resource() {
        let err = decode::<Board>("boards/b9", &json!({"name": "no id"})).unwrap_err();
        assert!(matches!(err, BackupError::Decode { .. }));
        assert!(err.to_string().contains("boards/b9"));
    }
}
