//! Error types for kdeconfig
//!
//! Provides a unified error type for reading and writing KDE configuration
//! entries through the external `kreadconfig`/`kwriteconfig` tools.

use thiserror::Error;

/// Result type alias for kdeconfig operations
pub type Result<T> = std::result::Result<T, KdeConfigError>;

/// Main error type for kdeconfig operations
#[derive(Debug, Error)]
pub enum KdeConfigError {
    /// The request is missing a mutation or an addressing field
    #[error("{0}")]
    InvalidRequest(String),

    /// A required external binary could not be located
    #[error("Failed to find required executable \"{binary}\" in paths: {search_path}")]
    ExternalToolMissing { binary: String, search_path: String },

    /// An external process could not be started
    #[error("Failed to execute {program}: {source}")]
    CommandExecution {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error (environment, tool selection)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request parameters could not be decoded
    #[error("Invalid parameters: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl KdeConfigError {
    /// Error raised when none of `value`, `delete`, `enabled` was supplied
    pub fn missing_mutation() -> Self {
        Self::InvalidRequest(
            "Invalid config! Please set one of 'value', 'delete', 'enabled'.".to_string(),
        )
    }

    /// Error raised when a required parameter is absent or empty
    pub fn missing_field(name: &str) -> Self {
        Self::InvalidRequest(format!("missing required arguments: {}", name))
    }

    /// Error raised when a file path cannot be passed to the tools unchanged
    pub fn non_utf8_path(path: &std::path::Path) -> Self {
        Self::InvalidRequest(format!("file path is not valid UTF-8: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_mutation_message() {
        let err = KdeConfigError::missing_mutation();
        assert_eq!(
            err.to_string(),
            "Invalid config! Please set one of 'value', 'delete', 'enabled'."
        );
    }

    #[test]
    fn test_tool_missing_display() {
        let err = KdeConfigError::ExternalToolMissing {
            binary: "kreadconfig5".to_string(),
            search_path: "/usr/bin:/bin".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("kreadconfig5"));
        assert!(msg.contains("/usr/bin:/bin"));
    }

    #[test]
    fn test_command_execution_has_source() {
        use std::error::Error as _;

        let err = KdeConfigError::CommandExecution {
            program: "/usr/bin/kwriteconfig5".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("Failed to execute /usr/bin/kwriteconfig5"));
    }
}
