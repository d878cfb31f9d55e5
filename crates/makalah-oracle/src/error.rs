//! Error types for content oracle operations

use thiserror::Error;

/// Errors that can occur while obtaining paper content
#[derive(Error, Debug)]
pub enum OracleError {
    /// No API key in the configuration or the environment
    #[error("API key not found: set the {0} environment variable or oracle.api_key")]
    MissingApiKey(String),

    /// HTTP request could not be completed
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Key rejected by the service
    #[error("Authentication failed ({status}): {message}")]
    Authentication { status: u16, message: String },

    /// Rate limit or quota exhausted
    #[error("Quota exceeded: {0}")]
    Quota(String),

    /// Server returned another error status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Response body is not the expected JSON
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Response carried no text at all
    #[error("Empty response from content oracle")]
    EmptyResponse,

    /// IO error reading fixture content
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl OracleError {
    /// Classify a non-success HTTP status
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 | 403 => OracleError::Authentication { status, message },
            429 => OracleError::Quota(message),
            _ => OracleError::Server { status, message },
        }
    }

    /// Short label of the failure kind, for user-facing messages
    pub fn kind(&self) -> &'static str {
        match self {
            OracleError::MissingApiKey(_) => "missing-api-key",
            OracleError::Network(_) => "network",
            OracleError::Authentication { .. } => "authentication",
            OracleError::Quota(_) => "quota",
            OracleError::Server { .. } => "server",
            OracleError::MalformedResponse(_) => "malformed-response",
            OracleError::EmptyResponse => "empty-response",
            OracleError::Io(_) => "io",
        }
    }
}

/// Result type for oracle operations
pub type Result<T> = std::result::Result<T, OracleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert_eq!(OracleError::from_status(401, "x".into()).kind(), "authentication");
        assert_eq!(OracleError::from_status(403, "x".into()).kind(), "authentication");
        assert_eq!(OracleError::from_status(429, "x".into()).kind(), "quota");
        let err = OracleError::from_status(503, "overloaded".into());
        assert_eq!(err.kind(), "server");
        assert_eq!(err.to_string(), "Server error (503): overloaded");
    }

    #[test]
    fn test_missing_key_names_variable() {
        let err = OracleError::MissingApiKey("API_KEY".into());
        assert!(err.to_string().contains("API_KEY"));
    }
}
