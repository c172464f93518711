//! Error types for the Aura application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire Aura application.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait. User-level failures in the
/// shell (bad path, unknown app) are converted to printed lines at the
/// interpreter boundary and never cross it as errors.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum AuraError {
    /// A filesystem path did not resolve to a node
    #[error("No such file or directory: {path}")]
    PathNotFound { path: String },

    /// A path resolved to a file where a directory was required
    #[error("Not a directory: {name}")]
    NotADirectory { name: String },

    /// A path resolved to a directory where a file was required
    #[error("Is a directory: {name}")]
    NotAFile { name: String },

    /// An application name missed the registry
    #[error("Unknown application: {name}")]
    UnknownApp { name: String },

    /// IO error (config file access)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuraError {
    /// Creates a PathNotFound error from path segments.
    pub fn path_not_found(segments: &[impl AsRef<str>]) -> Self {
        let joined = segments
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<_>>()
            .join("/");
        Self::PathNotFound {
            path: format!("/{joined}"),
        }
    }

    /// Creates an UnknownApp error
    pub fn unknown_app(name: impl Into<String>) -> Self {
        Self::UnknownApp { name: name.into() }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a PathNotFound error
    pub fn is_path_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

impl From<std::io::Error> for AuraError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for AuraError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for AuraError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, AuraError>`.
pub type Result<T> = std::result::Result<T, AuraError>;
