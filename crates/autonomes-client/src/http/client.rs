// HTTP implementation of the dashboard API

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::traits::DashboardApi;
use crate::types::{
    ChatReply, ChatRequest, DetailedStatus, HealthSnapshot, ModelInfo, ModelsResponse, PullAck,
};

/// Dashboard API client (reqwest, JSON in and out)
pub struct HttpDashboardClient {
    http_client: reqwest::Client,
    base_url: Url,
    prefix: Vec<String>,
}

impl HttpDashboardClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(ApiError::Client)?;

        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(config.base_url));
        }

        let prefix = config
            .api_prefix
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();

        tracing::debug!(base_url = %base_url, prefix = %config.api_prefix, "dashboard client ready");

        Ok(Self {
            http_client,
            base_url,
            prefix,
        })
    }

    /// Shorthand for a client with default prefix and timeout
    pub fn from_base_url(base_url: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig::new(base_url))
    }

    /// Build `{base}/{prefix}/{segments...}`; each segment is percent-encoded
    /// on its own so model names containing `/` stay a single segment.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(self.prefix.iter().map(String::as_str))
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!(%url, "GET");
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        Self::decode(response).await
    }

    async fn post_json<B, T>(&self, url: Url, body: Option<&B>) -> Result<T>
    where
        B: serde::Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        tracing::debug!(%url, "POST");
        let mut request = self.http_client.post(url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await.map_err(ApiError::Transport)?;
        Self::decode(response).await
    }

    /// Any non-2xx status is a failure, whatever the body says.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), body = %body, "dashboard API returned an error status");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await.map_err(ApiError::Transport)?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl DashboardApi for HttpDashboardClient {
    async fn chat(&self, request: ChatRequest) -> Result<ChatReply> {
        let url = self.endpoint(&["chat"])?;
        self.post_json(url, Some(&request)).await
    }

    async fn list_models(&self) -> Result<Vec<ModelInfo>> {
        let url = self.endpoint(&["models"])?;
        let envelope: ModelsResponse = self.get_json(url).await?;
        Ok(envelope.models)
    }

    async fn pull_model(&self, name: &str) -> Result<PullAck> {
        let url = self.endpoint(&["models", name, "pull"])?;
        self.post_json::<(), _>(url, None).await
    }

    async fn health(&self) -> Result<HealthSnapshot> {
        let url = self.endpoint(&["health"])?;
        self.get_json(url).await
    }

    async fn status(&self) -> Result<DetailedStatus> {
        let url = self.endpoint(&["status"])?;
        self.get_json(url).await
    }
}
