//! ZenMoney `/diff/` endpoint client.

use async_trait::async_trait;

use crate::config::{normalize_text_option, SyncConfig};
use crate::error::{Error, Result};
use crate::models::{Diff, DiffRequest};

/// Longest slice of a failed response body kept in `Error::Api`.
const ERROR_BODY_LIMIT: usize = 180;

/// An already-authorized way to ask the server for a diff.
#[async_trait]
pub trait DiffFetcher: Send + Sync {
    async fn fetch_diff(&self, request: &DiffRequest) -> Result<Diff>;
}

#[derive(Clone)]
pub struct ZenMoneyClient {
    endpoint: String,
    access_token: String,
    client: reqwest::Client,
}

impl std::fmt::Debug for ZenMoneyClient {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ZenMoneyClient")
            .field("endpoint", &self.endpoint)
            .field("access_token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl ZenMoneyClient {
    pub fn new(api_base_url: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        Self::with_client(api_base_url, access_token, reqwest::Client::builder().build()?)
    }

    pub fn from_config(config: &SyncConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        Self::with_client(config.api_base_url(), config.require_token()?, builder.build()?)
    }

    fn with_client(
        api_base_url: impl Into<String>,
        access_token: impl Into<String>,
        client: reqwest::Client,
    ) -> Result<Self> {
        let base_url = normalize_base_url(api_base_url.into())?;
        let access_token = normalize_text_option(Some(access_token.into())).ok_or_else(|| {
            Error::Config("ZenMoney access token must not be empty".to_string())
        })?;

        Ok(Self {
            endpoint: format!("{base_url}/diff/"),
            access_token,
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl DiffFetcher for ZenMoneyClient {
    async fn fetch_diff(&self, request: &DiffRequest) -> Result<Diff> {
        tracing::debug!(
            server_timestamp = request.server_timestamp,
            "Requesting diff from {}",
            self.endpoint
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.access_token)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status,
                body: body.trim().chars().take(ERROR_BODY_LIMIT).collect(),
            });
        }

        Ok(response.json::<Diff>().await?)
    }
}

fn normalize_base_url(raw: String) -> Result<String> {
    let base_url = normalize_text_option(Some(raw))
        .ok_or_else(|| Error::Config("API base URL must not be empty".to_string()))?;
    if base_url.starts_with("http://") || base_url.starts_with("https://") {
        Ok(base_url.trim_end_matches('/').to_string())
    } else {
        Err(Error::Config(
            "API base URL must include http:// or https://".to_string(),
        ))
    }
}
