//! Theme error types

use std::path::PathBuf;
use thiserror::Error;

/// Theme-related errors
///
/// None of these reach the user: the resolver logs them and falls back to
/// in-memory behavior.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Preference storage cannot be used at all
    #[error("Preference storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Failed to read or write the preference file
    #[error("Preference file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Preference file is not valid TOML
    #[error("Failed to parse preference file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Preference table could not be serialized
    #[error("Failed to serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Stored value is not one of `light`, `dark`, `system`
    #[error("Invalid theme preference: {0:?}")]
    InvalidPreference(String),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
