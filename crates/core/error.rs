//! Error types for the wg Redis adapter.

use thiserror::Error;

/// The main error type for the wg Redis adapter.
#[derive(Error, Debug)]
pub enum WgError {
    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport or client-side error from the underlying Redis client.
    #[error("Backend error: {0}")]
    Backend(String),

    /// The server answered a command with an error reply.
    #[error("Command error: {0}")]
    Command(String),
}

impl WgError {
    /// Build a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        WgError::Config(msg.into())
    }

    /// Whether the server rejected the command, as opposed to the
    /// connection or client failing.
    pub fn is_command_error(&self) -> bool {
        matches!(self, WgError::Command(_))
    }
}

/// Result type alias using WgError.
pub type Result<T> = std::result::Result<T, WgError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_serialization() {
        let json_err: serde_json::Error = serde_json::from_str::<i32>("invalid").unwrap_err();
        let err = WgError::Serialization(json_err);
        assert!(format!("{}", err).starts_with("Serialization error:"));
    }

    #[test]
    fn test_error_display_config() {
        let err = WgError::config("unknown redis option `foo`");
        assert_eq!(
            format!("{}", err),
            "Configuration error: unknown redis option `foo`"
        );
    }

    #[test]
    fn test_error_display_backend() {
        let err = WgError::Backend("connection refused".to_string());
        assert_eq!(format!("{}", err), "Backend error: connection refused");
    }

    #[test]
    fn test_error_display_command() {
        let err = WgError::Command("WRONGTYPE Operation against a key".to_string());
        assert_eq!(
            format!("{}", err),
            "Command error: WRONGTYPE Operation against a key"
        );
    }

    #[test]
    fn test_is_command_error() {
        assert!(WgError::Command("ERR".to_string()).is_command_error());
        assert!(!WgError::Backend("io".to_string()).is_command_error());
        assert!(!WgError::config("bad").is_command_error());
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err: serde_json::Error = serde_json::from_str::<i32>("not a number").unwrap_err();
        let err: WgError = json_err.into();
        assert!(matches!(err, WgError::Serialization(_)));
    }
}
