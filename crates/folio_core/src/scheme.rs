//! Resolved color scheme

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The light/dark value actually applied to the UI
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    /// CSS class / `color-scheme` keyword for this scheme
    pub fn as_str(self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }

    /// Map an OS "prefers dark" signal to a scheme
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown scheme name
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown color scheme `{0}` (expected light or dark)")]
pub struct UnknownScheme(pub String);

impl FromStr for ColorScheme {
    type Err = UnknownScheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(ColorScheme::Light),
            "dark" => Ok(ColorScheme::Dark),
            other => Err(UnknownScheme(other.to_string())),
        }
    }
}
