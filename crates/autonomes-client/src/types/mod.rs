pub mod chat;
pub mod model;
pub mod health;

pub use chat::{ChatRequest, ChatReply};
pub use model::{ModelInfo, ModelDetails, ModelsResponse, PullAck};
pub use health::{HealthSnapshot, HealthStatus, DetailedStatus};

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parse a server timestamp.
///
/// Accepts RFC 3339 (`2024-05-01T10:00:00-07:00`) and the offset-less ISO
/// form the backend emits (`2024-05-01T10:00:00.123456`), which is taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// `null` reads the same as an absent field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Timestamp fields never fail a response: absent, null, non-string or
/// unparseable values all become `None`.
pub(crate) fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(Value::as_str).and_then(parse_timestamp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let ts = parse_timestamp("2024-05-01T10:00:00-07:00").unwrap();
        assert_eq!(ts.hour(), 17);
    }

    #[test]
    fn test_parse_naive_iso_with_fraction() {
        let ts = parse_timestamp("2024-05-01T10:00:00.123456").unwrap();
        assert_eq!(ts.hour(), 10);
        assert_eq!(ts.minute(), 0);
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_timestamp("yesterday").is_none());
    }
}
