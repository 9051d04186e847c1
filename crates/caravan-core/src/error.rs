//! Error types for the Caravan application.

use thiserror::Error;

/// A shared error type for the entire Caravan application.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone)]
pub enum CaravanError {
    /// Entity not found error with type information
    #[error("{entity_type} not found: '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Prompt template rendering error
    #[error("Template error: {message}")]
    Template { message: String },

    /// Invalid user-supplied input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Inference backend could not be reached
    #[error("Backend unreachable at {url}: {message}")]
    Unreachable { url: String, message: String },

    /// Error returned by an HTTP backend (LLM server or search endpoint)
    #[error("Backend error: {message}")]
    Backend {
        status: Option<u16>,
        message: String,
    },

    /// Task execution error
    #[error("Task execution error: {0}")]
    Execution(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CaravanError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
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

    /// Creates an InvalidInput error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Creates an Unreachable error
    pub fn unreachable(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Unreachable {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates a Backend error
    pub fn backend(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Backend {
            status,
            message: message.into(),
        }
    }

    /// Creates an Execution error
    pub fn execution(message: impl Into<String>) -> Self {
        Self::Execution(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this error means the inference backend is unreachable
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable { .. })
    }

    /// Check if this is a template error
    pub fn is_template(&self) -> bool {
        matches!(self, Self::Template { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for CaravanError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for CaravanError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for CaravanError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<minijinja::Error> for CaravanError {
    fn from(err: minijinja::Error) -> Self {
        Self::Template {
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, CaravanError>`.
pub type Result<T> = std::result::Result<T, CaravanError>;
