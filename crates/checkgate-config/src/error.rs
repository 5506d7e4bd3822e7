//! Configuration error types

use thiserror::Error;

/// Errors that can occur while parsing or reading a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Inline JSON could not be parsed
    #[error("Failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Inline TOML could not be parsed
    #[error("Failed to parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// Document root is not an object of check names
    #[error("Configuration root must be an object keyed by check name, found {0}")]
    NotAnObject(String),

    /// A configured value has the wrong shape
    #[error("Check '{check}' key '{key}': expected {expected}, found {found}")]
    TypeMismatch {
        /// Check the key was read for
        check: String,
        /// Dotted key that was read
        key: String,
        /// Expected shape
        expected: &'static str,
        /// Shape actually configured
        found: String,
    },
}
