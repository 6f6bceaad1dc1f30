use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{lenient_timestamp, null_as_default};

/// Health of the whole system or of a single service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
    #[default]
    Unknown,
}

impl HealthStatus {
    /// Case-insensitive; anything unrecognised is `Unknown`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "healthy" => HealthStatus::Healthy,
            "degraded" => HealthStatus::Degraded,
            "unhealthy" => HealthStatus::Unhealthy,
            _ => HealthStatus::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "healthy",
            HealthStatus::Degraded => "degraded",
            HealthStatus::Unhealthy => "unhealthy",
            HealthStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for HealthStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<Value>::deserialize(deserializer)?;
        Ok(raw
            .as_ref()
            .and_then(Value::as_str)
            .map(HealthStatus::parse)
            .unwrap_or_default())
    }
}

/// `GET /api/health` response, replaced wholesale on every fetch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthSnapshot {
    pub status: HealthStatus,
    pub version: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub services: BTreeMap<String, HealthStatus>,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// `GET /api/status` response.
///
/// Kept as the raw JSON document; the accessors read the handful of fields
/// the dashboard shows and never validate the rest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DetailedStatus(pub Value);

impl DetailedStatus {
    pub fn version(&self) -> Option<&str> {
        self.0.get("version").and_then(Value::as_str)
    }

    pub fn environment(&self) -> Option<&str> {
        self.0.get("environment").and_then(Value::as_str)
    }

    /// `ollama.models_count`, only when the `ollama` section exists
    pub fn models_count(&self) -> Option<u64> {
        self.0
            .get("ollama")
            .filter(|section| !section.is_null())
            .map(|section| section.get("models_count").and_then(Value::as_u64).unwrap_or(0))
    }

    /// `telemetry.traces_enabled`, only when the `telemetry` section exists.
    /// A missing or non-boolean flag reads as disabled.
    pub fn traces_enabled(&self) -> Option<bool> {
        self.0
            .get("telemetry")
            .filter(|section| !section.is_null())
            .map(|section| section.get("traces_enabled").and_then(Value::as_bool).unwrap_or(false))
    }

    pub fn raw(&self) -> &Value {
        &self.0
    }
}
