use thiserror::Error;

/// Failures surfaced by [`crate::DashboardApi`] calls.
///
/// Missing fields in an otherwise valid JSON body are not errors; they
/// deserialize to empty values.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The server answered with a non-2xx status. The body is kept for
    /// logging only and never shown to the user.
    #[error("HTTP error! status: {status}")]
    Status { status: u16, body: String },

    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl ApiError {
    /// HTTP status code, when the failure came from the server.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = ApiError::Status {
            status: 503,
            body: "{\"detail\":\"down\"}".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP error! status: 503");
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn test_decode_error_has_no_status() {
        let err: ApiError = serde_json::from_str::<serde_json::Value>("not json")
            .unwrap_err()
            .into();
        assert!(err.status().is_none());
        assert!(err.to_string().starts_with("Invalid response body"));
    }
}
