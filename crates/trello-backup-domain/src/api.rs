use async_trait::async_trait;
use serde_json::Value;
use trello_backup_core::BackupResult;

/// Resource-specific query parameters, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiQuery {
    params: Vec<(String, String)>,
}

impl ApiQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    /// Cards, lists and checklists inlined into the board payload.
    ///
    /// With `with_actions` the board's action log (up to 1000 entries) is
    /// inlined as well, without the member objects Trello would nest in each.
    pub fn board_detail(with_actions: bool) -> Self {
        let query = Self::new()
            .param("cards", "all")
            .param("lists", "all")
            .param("checklists", "all");

        if with_actions {
            query
                .param("actions", "all")
                .param("actions_limit", "1000")
                .param("action_member", "false")
                .param("action_memberCreator", "false")
        } else {
            query
        }
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn to_query_string(&self) -> String {
        self.params
            .iter()
            .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Resource paths relative to the API base URL.
pub mod resources {
    pub fn member_boards() -> String {
        "members/me/boards".to_string()
    }

    pub fn board(board_id: &str) -> String {
        format!("boards/{board_id}")
    }

    pub fn card_actions(card_id: &str) -> String {
        format!("cards/{card_id}/actions")
    }

    pub fn card_attachments(card_id: &str) -> String {
        format!("cards/{card_id}/attachments")
    }
}

/// Read-only access to the Trello REST API.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait TrelloApi: Send + Sync {
    /// GET `{base}{path}?{query}` with credentials appended, decoded as JSON.
    async fn request(&self, path: &str, query: &ApiQuery) -> BackupResult<Value>;

    /// GET an attachment URL and return the raw body.
    async fn download(&self, url: &str) -> BackupResult<Vec<u8>>;
}
