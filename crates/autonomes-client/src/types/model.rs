use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{lenient_timestamp, null_as_default};

/// One entry of `GET /api/models`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub model: String,
    #[serde(rename = "size", deserialize_with = "null_as_default")]
    pub size_bytes: u64,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub modified_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub details: ModelDetails,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelDetails {
    #[serde(deserialize_with = "null_as_default")]
    pub parameter_size: String,
    #[serde(rename = "quantization_level", deserialize_with = "null_as_default")]
    pub quantization: String,
    #[serde(deserialize_with = "null_as_default")]
    pub family: String,
}

/// Envelope of `GET /api/models`; a missing or null `models` key is an
/// empty list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelsResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub models: Vec<ModelInfo>,
}

/// Acknowledgement of `POST /api/models/{name}/pull`. The download runs in
/// the background on the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PullAck {
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
}
