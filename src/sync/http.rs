use super::RemoteSource;
use crate::config::RemoteConfig;
use crate::core::data::Quote;
use crate::utils::error::{AppError, AppResult};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};
use uuid::Uuid;

const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// A plain JSON collection resource: `GET` lists records, `POST` adds them
pub struct HttpRemote {
    client: Client,
    url: String,
}

impl HttpRemote {
    pub fn new(config: &RemoteConfig) -> AppResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("quotegen/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// A single quote is posted as an object, several as an array
fn push_body(quotes: &[Quote]) -> AppResult<Value> {
    let body = match quotes {
        [single] => serde_json::to_value(single),
        many => serde_json::to_value(many),
    };
    body.map_err(|e| AppError::Sync(format!("Failed to serialize quotes: {}", e)))
}

#[async_trait]
impl RemoteSource for HttpRemote {
    async fn fetch(&self) -> AppResult<Vec<Value>> {
        debug!(url = %self.url, "fetching remote quotes");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Failed to fetch quotes from server: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::Network(format!(
                "Failed to fetch quotes: {} - {}",
                status, error_text
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| AppError::Sync(format!("Failed to parse server response: {}", e)))?;

        match body {
            Value::Array(records) => Ok(records),
            _ => Err(AppError::Sync(
                "Server response is not a list of records".to_string(),
            )),
        }
    }

    async fn push(&self, quotes: &[Quote]) -> AppResult<()> {
        let request_id = Uuid::new_v4();
        let body = push_body(quotes)?;

        info!(url = %self.url, count = quotes.len(), %request_id, "posting quotes");

        let response = self
            .client
            .post(&self.url)
            .header(REQUEST_ID_HEADER, request_id.to_string())
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Failed to post quotes: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::Network(format!(
                "Failed to post quotes: {} - {}",
                status, error_text
            )));
        }

        debug!(%request_id, status = %response.status(), "quotes posted");
        Ok(())
    }
}
