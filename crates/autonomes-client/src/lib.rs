pub mod types;
pub mod traits;
pub mod config;
pub mod error;
pub mod http;

pub use traits::DashboardApi;
pub use config::ClientConfig;
pub use error::{ApiError, Result};
pub use http::HttpDashboardClient;
pub use types::{
    ChatRequest, ChatReply,
    ModelInfo, ModelDetails, PullAck,
    HealthSnapshot, HealthStatus, DetailedStatus,
};
