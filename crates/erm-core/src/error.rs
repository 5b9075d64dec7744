//! Error Types

use thiserror::Error;

/// Result type alias for chat exchanges
pub type Result<T> = std::result::Result<T, ChatError>;

/// Everything that can go wrong between submitting a message and reading a reply
#[derive(Error, Debug)]
pub enum ChatError {
    /// Connection refused, DNS failure, non-2xx status, or an undecodable body
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Reply body was not the expected JSON shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failure reported by a non-HTTP transport
    #[error("Transport error: {0}")]
    Transport(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let transport = ChatError::Transport("connection refused".into());
        assert_eq!(transport.to_string(), "Transport error: connection refused");

        let json = ChatError::from(serde_json::from_str::<u8>("nope").unwrap_err());
        assert!(json.to_string().starts_with("JSON error:"));
    }
}
