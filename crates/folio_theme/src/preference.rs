//! Theme preference and resolution

use crate::error::ThemeError;
use folio_core::ColorScheme;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The user's display-mode choice
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    /// Follow the OS color scheme
    #[default]
    System,
}

impl ThemePreference {
    pub const ALL: [ThemePreference; 3] = [
        ThemePreference::Light,
        ThemePreference::Dark,
        ThemePreference::System,
    ];

    /// Stored literal
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Next value of the cycling control: light, dark, system, light, ...
    pub fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
            Self::System => Self::Light,
        }
    }

    /// The scheme this preference pins, `None` for `system`
    pub fn fixed_scheme(self) -> Option<ColorScheme> {
        match self {
            Self::Light => Some(ColorScheme::Light),
            Self::Dark => Some(ColorScheme::Dark),
            Self::System => None,
        }
    }

    pub fn follows_system(self) -> bool {
        self == Self::System
    }

    /// Parse a stored value; anything unrecognized yields `None`
    pub fn from_stored(value: &str) -> Option<Self> {
        value.parse().ok()
    }
}

impl From<ColorScheme> for ThemePreference {
    fn from(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self::Light,
            ColorScheme::Dark => Self::Dark,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(ThemeError::InvalidPreference(other.to_string())),
        }
    }
}

/// Resolve a preference against the OS scheme
///
/// Shared by the resolver and the early bootstrap path so both always agree.
pub fn resolve(preference: ThemePreference, os_scheme: ColorScheme) -> ColorScheme {
    preference.fixed_scheme().unwrap_or(os_scheme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_visits_every_preference() {
        let mut pref = ThemePreference::Light;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(pref);
            pref = pref.next();
        }
        assert_eq!(seen, ThemePreference::ALL.to_vec());
        assert_eq!(pref, ThemePreference::Light);
    }

    #[test]
    fn test_resolve_table() {
        use ColorScheme::*;
        assert_eq!(resolve(ThemePreference::Light, Dark), Light);
        assert_eq!(resolve(ThemePreference::Dark, Light), Dark);
        assert_eq!(resolve(ThemePreference::System, Dark), Dark);
        assert_eq!(resolve(ThemePreference::System, Light), Light);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        for pref in ThemePreference::ALL {
            for os in [ColorScheme::Light, ColorScheme::Dark] {
                let first = resolve(pref, os);
                assert!((0..5).all(|_| resolve(pref, os) == first));
            }
        }
    }

    #[test]
    fn test_stored_values() {
        assert_eq!(
            ThemePreference::from_stored("dark"),
            Some(ThemePreference::Dark)
        );
        assert_eq!(ThemePreference::from_stored("Dark"), None);
        assert_eq!(ThemePreference::from_stored(""), None);
        assert!(matches!(
            "sepia".parse::<ThemePreference>(),
            Err(ThemeError::InvalidPreference(v)) if v == "sepia"
        ));
    }

    #[test]
    fn test_serde_uses_lowercase_literals() {
        let json = serde_json::to_string(&ThemePreference::System).unwrap();
        assert_eq!(json, "\"system\"");
        let pref: ThemePreference = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(pref, ThemePreference::Light);
    }
}
