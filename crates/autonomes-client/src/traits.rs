use async_trait::async_trait;

use crate::error::Result;
use crate::types::{ChatReply, ChatRequest, DetailedStatus, HealthSnapshot, ModelInfo, PullAck};

/// The four read/write paths the dashboard consumes.
///
/// Implemented over HTTP by [`crate::HttpDashboardClient`]; components only
/// depend on this trait so they can run against any backend.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// `POST /api/chat`
    async fn chat(&self, request: ChatRequest) -> Result<ChatReply>;

    /// `GET /api/models`
    async fn list_models(&self) -> Result<Vec<ModelInfo>>;

    /// `POST /api/models/{name}/pull`
    async fn pull_model(&self, name: &str) -> Result<PullAck>;

    /// `GET /api/health`
    async fn health(&self) -> Result<HealthSnapshot>;

    /// `GET /api/status`
    async fn status(&self) -> Result<DetailedStatus>;
}
