use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use trello_backup_core::{redact_url, BackupError, BackupResult, Credentials};
use trello_backup_domain::{ApiQuery, TrelloApi};

const USER_AGENT: &str = concat!("trello-backup/", env!("CARGO_PKG_VERSION"));

/// Trello REST client. One GET per call, no retries and no timeout beyond
/// what `reqwest` applies by default.
pub struct HttpTrelloClient {
    client: Client,
    base_url: String,
    key: String,
    token: String,
}

impl HttpTrelloClient {
    pub fn new(credentials: &Credentials) -> BackupResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| BackupError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: credentials.api_base_url.clone(),
            key: credentials.developer_public_key.clone(),
            token: credentials.member_token.clone(),
        })
    }

    /// `{base}{path}?{query}&key={key}&token={token}`
    pub fn request_url(&self, path: &str, query: &ApiQuery) -> String {
        let mut url = format!("{}{}?", self.base_url, path);
        if !query.is_empty() {
            url.push_str(&query.to_query_string());
            url.push('&');
        }
        url.push_str(&format!(
            "key={}&token={}",
            urlencoding::encode(&self.key),
            urlencoding::encode(&self.token)
        ));
        url
    }

    async fn get(&self, url: &str) -> BackupResult<Response> {
        let resource = redact_url(url);
        tracing::debug!("GET {}", resource);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| BackupError::Transport {
                resource: resource.clone(),
                message: e.without_url().to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackupError::Http {
                resource,
                status: status.as_u16(),
            });
        }

        Ok(response)
    }

    async fn body(url: &str, response: Response) -> BackupResult<Vec<u8>> {
        let bytes = response
            .bytes()
            .await
            .map_err(|e| BackupError::Transport {
                resource: redact_url(url),
                message: e.without_url().to_string(),
            })?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl TrelloApi for HttpTrelloClient {
    async fn request(&self, path: &str, query: &ApiQuery) -> BackupResult<Value> {
        let url = self.request_url(path, query);
        let response = self.get(&url).await?;
        let body = Self::body(&url, response).await?;

        serde_json::from_slice(&body).map_err(|e| BackupError::Decode {
            resource: redact_url(&url),
            message: e.to_string(),
        })
    }

    async fn download(&self, url: &str) -> BackupResult<Vec<u8>> {
        let response = self.get(url).await?;
        let body = Self::body(url, response).await?;
        tracing::debug!("Downloaded {} bytes from {}", body.len(), redact_url(url));
        Ok(body)
    }
}
