//! Early theme application
//!
//! Runs before the resolver exists so the first paint already has the right
//! scheme. Uses the same [`load_preference`] and [`resolve`] as the
//! resolver, so the resolver's own first application is a no-op.

use crate::document::DocumentStyle;
use crate::preference::{resolve, ThemePreference};
use crate::store::{load_preference, PreferenceStore};
use folio_core::ColorScheme;
use serde::Serialize;

/// What the bootstrap path read and applied
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct InitialTheme {
    pub preference: ThemePreference,
    pub os_scheme: ColorScheme,
    pub resolved: ColorScheme,
}

/// Synchronously read the stored preference and apply the resolved scheme
pub fn apply_initial_theme(
    store: &dyn PreferenceStore,
    storage_key: &str,
    os_scheme: ColorScheme,
    document: &dyn DocumentStyle,
) -> InitialTheme {
    let preference = load_preference(store, storage_key);
    let resolved = resolve(preference, os_scheme);
    document.apply_scheme(resolved);
    tracing::debug!("initial theme {} (preference {})", resolved, preference);

    InitialTheme {
        preference,
        os_scheme,
        resolved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::RootStyle;
    use crate::store::{MemoryStore, UnavailableStore};

    #[test]
    fn test_stored_preference_wins_over_os() {
        let store = MemoryStore::with_value("theme", "light");
        let root = RootStyle::new();
        let initial = apply_initial_theme(&store, "theme", ColorScheme::Dark, &root);
        assert_eq!(initial.resolved, ColorScheme::Light);
        assert!(root.has_class("light"));
    }

    #[test]
    fn test_unavailable_storage_follows_os() {
        let root = RootStyle::new();
        let initial = apply_initial_theme(&UnavailableStore, "theme", ColorScheme::Dark, &root);
        assert_eq!(initial.preference, ThemePreference::System);
        assert_eq!(root.color_scheme(), Some(ColorScheme::Dark));
    }
}
