//! Error types for the REST client.

use thiserror::Error;

/// Result type alias for API calls.
pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The request failed before a response arrived, or the body could not be
    /// decoded.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("{}", rejected_text(.status, .message))]
    Rejected { status: u16, message: Option<String> },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

fn rejected_text(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(m) => m.to_string(),
        None => format!("Request failed with status {status}"),
    }
}

impl ApiError {
    /// The human-readable message the server sent with a rejection, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// HTTP status of a rejection.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            ApiError::InvalidUrl(_) => None,
        }
    }

    /// Build a rejection from a status code and the raw response body.
    ///
    /// JSON bodies contribute their `message` field; a plain-text body is used
    /// as-is (the forgot-password endpoint answers with bare strings).
    pub(crate) fn rejected(status: u16, body: &str) -> Self {
        ApiError::Rejected {
            status,
            message: extract_message(body),
        }
    }
}

pub(crate) fn extract_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(map)) => map
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string),
        Ok(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s),
        Ok(_) => None,
        Err(_) if !body.starts_with('<') => Some(body.to_string()),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_from_json_body() {
        let err = ApiError::rejected(400, r#"{"message":"Email already registered","status":400}"#);
        assert_eq!(err.server_message(), Some("Email already registered"));
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.to_string(), "Email already registered");
    }

    #[test]
    fn test_blank_or_missing_message_is_none() {
        assert_eq!(extract_message(""), None);
        assert_eq!(extract_message(r#"{"status":401}"#), None);
        assert_eq!(extract_message(r#"{"message":"  "}"#), None);
        assert_eq!(extract_message("[1,2]"), None);
    }

    #[test]
    fn test_plain_text_body_is_the_message() {
        assert_eq!(
            extract_message("Failed to process request"),
            Some("Failed to process request".to_string())
        );
    }

    #[test]
    fn test_html_error_page_is_ignored() {
        assert_eq!(extract_message("<html><body>502</body></html>"), None);
    }

    #[test]
    fn test_display_without_message() {
        let err = ApiError::rejected(503, "");
        assert_eq!(err.to_string(), "Request failed with status 503");
    }
}
