// src/errors.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReplError {
    #[error("Failed to read file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Execution service rejected the submission with status {status}: {}", .message.as_deref().unwrap_or("<no error message>"))]
    Service { status: u16, message: Option<String> },

    #[error("Unexpected response structure: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ReplError {
    /// The `error` field the execution service reported, if the response carried one.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ReplError::Service { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReplError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_message_only_for_service_errors() {
        let rejected = ReplError::Service {
            status: 400,
            message: Some("compile error".to_string()),
        };
        assert_eq!(rejected.backend_message(), Some("compile error"));

        let silent = ReplError::Service { status: 502, message: None };
        assert_eq!(silent.backend_message(), None);
        assert!(silent.to_string().contains("<no error message>"));

        let config = ReplError::Config("bad endpoint".to_string());
        assert_eq!(config.backend_message(), None);
    }
}
