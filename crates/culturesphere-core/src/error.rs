//! Error taxonomy for calls to the recommendation API.

use thiserror::Error;

/// Fallback detail when a failed response carries neither an error field nor
/// a reason phrase.
pub const UNKNOWN_SERVER_ERROR: &str = "unknown server error";

/// Failure of a single recommendation call.
///
/// The client converts every transport or decoding failure into one of these
/// kinds. The reason strings on `Unreachable` and `Unknown` are diagnostic and
/// meant for logs only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// No connection could be made to the backend.
    #[error("Unable to connect to server ({0}). Please ensure the backend is running.")]
    Unreachable(String),

    /// The backend answered with a non-success status.
    #[error("Server error: {0}")]
    ServerError(String),

    /// Anything else: malformed body, missing field, unexpected failure.
    #[error("Unexpected error: {0}")]
    Unknown(String),
}

impl ClientError {
    /// Short, stable name for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ClientError::Unreachable(_) => "unreachable",
            ClientError::ServerError(_) => "server_error",
            ClientError::Unknown(_) => "unknown",
        }
    }

    /// Classify a transport error raised before any response arrived.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            ClientError::Unreachable(err.to_string())
        } else {
            ClientError::Unknown(err.to_string())
        }
    }

    /// Build a `ServerError` from a non-success status and its raw body.
    pub(crate) fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|e| !e.trim().is_empty())
            .or_else(|| status.canonical_reason().map(str::to_string))
            .unwrap_or_else(|| UNKNOWN_SERVER_ERROR.to_string());
        ClientError::ServerError(detail)
    }
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_server_error_prefers_body_field() {
        let err = ClientError::from_status(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"error": "rate limited"}"#,
        );
        assert_eq!(err, ClientError::ServerError("rate limited".to_string()));
    }

    #[test]
    fn test_server_error_falls_back_to_reason_phrase() {
        let err = ClientError::from_status(StatusCode::BAD_GATEWAY, "<html>oops</html>");
        assert_eq!(err, ClientError::ServerError("Bad Gateway".to_string()));

        let err = ClientError::from_status(StatusCode::NOT_FOUND, r#"{"error": "  "}"#);
        assert_eq!(err, ClientError::ServerError("Not Found".to_string()));
    }

    #[test]
    fn test_server_error_without_reason_uses_generic_detail() {
        let status = StatusCode::from_u16(599).unwrap();
        let err = ClientError::from_status(status, "");
        assert_eq!(err, ClientError::ServerError(UNKNOWN_SERVER_ERROR.to_string()));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ClientError::Unreachable(String::new()).kind(), "unreachable");
        assert_eq!(ClientError::ServerError(String::new()).kind(), "server_error");
        assert_eq!(ClientError::Unknown(String::new()).kind(), "unknown");
    }
}
