//! Client Errors
//!
//! Every failure a request can end in. Hooks turn these into a display string
//! or a redirect; nothing here is shown to the user verbatim except
//! `Rejected`, which carries the server's own message.

use thiserror::Error;

/// Result type for client operations
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// HTTP 401: the stored credential (or the login attempt) was refused.
    #[error("unauthorized")]
    Unauthorized { message: Option<String> },

    /// The envelope came back with `success: false`.
    #[error("{0}")]
    Rejected(String),

    /// Any other non-2xx status.
    #[error("server responded with status {status}")]
    Status { status: u16, message: Option<String> },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message the server attached to the failure, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected(message) => Some(message),
            ApiError::Status { message, .. } | ApiError::Unauthorized { message } => {
                message.as_deref()
            }
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message() {
        assert_eq!(ApiError::Rejected("forbidden".into()).server_message(), Some("forbidden"));
        let status = ApiError::Status { status: 400, message: Some("Missing name".into()) };
        assert_eq!(status.server_message(), Some("Missing name"));
        let refused = ApiError::Unauthorized { message: Some("Incorrect password".into()) };
        assert_eq!(refused.server_message(), Some("Incorrect password"));
        assert_eq!(ApiError::Unauthorized { message: None }.server_message(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(ApiError::Rejected("forbidden".into()).to_string(), "forbidden");
        let status = ApiError::Status { status: 500, message: None };
        assert_eq!(status.to_string(), "server responded with status 500");
    }
}
