use std::fmt;

use crate::url_builder::{redact_key, redact_key_in_place};

#[derive(Debug)]
pub enum GmpError {
    /// Represents HTTP/network errors (DNS, connection, body read)
    Http(reqwest::Error),
    /// The request context was cancelled before the call completed
    Cancelled,
    /// The request context deadline elapsed before the call completed
    Timeout,
    /// The service answered with a non-200 status. `url` is the full request
    /// URL, key included; `Display` masks the key.
    Status { status: u16, url: String },
    /// Represents JSON parsing errors
    Parse(serde_json::Error),
    /// The service reported `INVALID_REQUEST`; holds its `error_message`
    InvalidRequest(String),
    /// Represents missing environment variable errors
    MissingEnvVar(String),
}

impl GmpError {
    /// True for errors caused by the request context, not by the service.
    #[must_use]
    pub fn is_cancellation(&self) -> bool {
        matches!(self, GmpError::Cancelled | GmpError::Timeout)
    }
}

impl std::error::Error for GmpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GmpError::Http(e) => Some(e),
            GmpError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for GmpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GmpError::Http(e) => write!(f, "HTTP error: {e}"),
            GmpError::Cancelled => write!(f, "request cancelled"),
            GmpError::Timeout => write!(f, "request deadline exceeded"),
            GmpError::Status { status, url } => {
                write!(f, "receive {status} response from {}", redact_key(url))
            }
            GmpError::Parse(e) => write!(f, "Parse error: {e}"),
            GmpError::InvalidRequest(message) => write!(f, "{message}"),
            GmpError::MissingEnvVar(var) => write!(
                f,
                "Missing required environment variable: {var}\n\
                 Please set it in your environment or .env file"
            ),
        }
    }
}

impl From<reqwest::Error> for GmpError {
    fn from(mut err: reqwest::Error) -> Self {
        if let Some(url) = err.url_mut() {
            redact_key_in_place(url);
        }
        GmpError::Http(err)
    }
}

impl From<serde_json::Error> for GmpError {
    fn from(err: serde_json::Error) -> Self {
        GmpError::Parse(err)
    }
}

/// Helper type for Result with `GmpError`
pub type Result<T> = std::result::Result<T, GmpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_request_displays_service_message_verbatim() {
        let err = GmpError::InvalidRequest("bad input".to_string());
        assert_eq!(err.to_string(), "bad input");
    }

    #[test]
    fn status_error_mentions_code_and_url() {
        let err = GmpError::Status {
            status: 403,
            url: "https://example.com/staticmap".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("403"));
        assert!(text.contains("https://example.com/staticmap"));
    }

    #[test]
    fn status_error_text_masks_the_key() {
        let err = GmpError::Status {
            status: 403,
            url: "https://example.com/staticmap?center=Paris&key=supersecret".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("403"));
        assert!(text.contains("center=Paris"));
        assert!(!text.contains("supersecret"));
        if let GmpError::Status { url, .. } = &err {
            assert!(url.contains("supersecret"));
        }
    }

    #[test]
    fn only_context_errors_are_cancellation() {
        assert!(GmpError::Cancelled.is_cancellation());
        assert!(GmpError::Timeout.is_cancellation());
        assert!(!GmpError::InvalidRequest(String::new()).is_cancellation());
    }
}
