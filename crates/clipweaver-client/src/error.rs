//! Storyboard client error types.

use reqwest::StatusCode;
use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

/// Shown when the backend answers with a non-success status.
pub const MSG_ANALYSIS_FAILED: &str = "Error analyzing video";

/// Shown when the request never completed.
pub const MSG_CONNECTION_FAILED: &str = "Error connecting to backend";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Backend rejected request with status {status}")]
    Rejected { status: StatusCode },

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// The fixed message the form shows for this failure.
    ///
    /// Status codes and transport causes are deliberately collapsed.
    pub fn user_message(&self) -> &'static str {
        match self {
            ClientError::Rejected { .. } => MSG_ANALYSIS_FAILED,
            ClientError::Transport(_) | ClientError::InvalidResponse(_) | ClientError::Config(_) => {
                MSG_CONNECTION_FAILED
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_message_ignores_status() {
        for status in [StatusCode::BAD_REQUEST, StatusCode::INTERNAL_SERVER_ERROR, StatusCode::NOT_FOUND] {
            let err = ClientError::Rejected { status };
            assert_eq!(err.user_message(), MSG_ANALYSIS_FAILED);
        }
    }

    #[test]
    fn test_other_failures_are_connection_errors() {
        let err = ClientError::InvalidResponse("truncated body".to_string());
        assert_eq!(err.user_message(), MSG_CONNECTION_FAILED);
        let err = ClientError::Config("bad base URL".to_string());
        assert_eq!(err.user_message(), MSG_CONNECTION_FAILED);
    }
}
