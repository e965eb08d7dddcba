//! Navigator error types

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur while talking to the navigator service
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NavigatorError {
    /// The request could not be constructed and was never sent
    #[error("The query was invalid and not sent: {0}")]
    InvalidQuery(String),

    /// No response data arrived or the transport failed
    #[error("The response data could not be read: {0}")]
    ResponseUnreadable(String),

    /// The transport timed out
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The configured timeout in seconds
        timeout_secs: u64,
    },

    /// The server answered with a non-success status
    #[error("Server returned status code {status}{}", status_detail(.message))]
    ServerStatus {
        /// HTTP status code
        status: u16,
        /// Error text from the response body, if any
        message: Option<String>,
    },

    /// The server answered 2xx but the payload was an error envelope
    #[error("The server reported an error: {0}")]
    ServerReportedError(String),

    /// The raw bytes could not be repaired into UTF-8 text
    #[error("The received data had to be re-encoded before parsing, which failed.")]
    ReEncodingFailed,

    /// The text did not have the expected JSON shape
    #[error("The received data could not be decoded as JSON: {0}")]
    DecodeFailed(String),

    /// A resource path could not be parsed
    #[error("The URL to this specific resource could not be read: {0}")]
    InvalidResourcePath(String),

    /// Invalid configuration or HTTP client setup failure
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

#[allow(clippy::ref_option)] // thiserror hands fields over by reference
fn status_detail(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(" and error: {m}"))
        .unwrap_or_default()
}

impl NavigatorError {
    /// Returns true if the caller caused this error
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidQuery(_) | Self::InvalidResourcePath(_) | Self::ConfigurationError(_)
        )
    }

    pub(crate) fn invalid_query(reason: impl Into<String>) -> Self {
        Self::InvalidQuery(reason.into())
    }
}

impl From<DomainError> for NavigatorError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidResourcePath(path) => Self::InvalidResourcePath(path),
            other => Self::InvalidQuery(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors() {
        assert!(NavigatorError::InvalidQuery("empty".to_string()).is_client_error());
        assert!(NavigatorError::InvalidResourcePath("/x".to_string()).is_client_error());
        assert!(NavigatorError::ConfigurationError("bad".to_string()).is_client_error());
    }

    #[test]
    fn test_non_client_errors() {
        assert!(!NavigatorError::ReEncodingFailed.is_client_error());
        assert!(!NavigatorError::Timeout { timeout_secs: 5 }.is_client_error());
        assert!(!NavigatorError::DecodeFailed("x".to_string()).is_client_error());
        assert!(
            !NavigatorError::ServerStatus {
                status: 500,
                message: None
            }
            .is_client_error()
        );
    }

    #[test]
    fn test_error_display() {
        let err = NavigatorError::ServerStatus {
            status: 500,
            message: None,
        };
        assert_eq!(err.to_string(), "Server returned status code 500");

        let err = NavigatorError::ServerStatus {
            status: 500,
            message: Some("Internal Server Error".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Server returned status code 500 and error: Internal Server Error"
        );

        let err = NavigatorError::InvalidQuery("building id must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "The query was invalid and not sent: building id must not be empty"
        );

        let err = NavigatorError::Timeout { timeout_secs: 10 };
        assert!(err.to_string().contains("10"));
    }

    #[test]
    fn test_from_domain_error() {
        let err: NavigatorError = DomainError::invalid_path("url").into();
        assert_eq!(err, NavigatorError::InvalidResourcePath("url".to_string()));
        assert_eq!(
            err.to_string(),
            "The URL to this specific resource could not be read: url"
        );

        let err: NavigatorError = DomainError::InvalidRoomId("x".to_string()).into();
        assert!(matches!(err, NavigatorError::InvalidQuery(_)));
    }
}
