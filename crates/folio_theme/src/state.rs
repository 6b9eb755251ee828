//! Global theme state singleton

use crate::context::ThemeContext;
use crate::resolver::ThemeResolver;
use std::sync::OnceLock;

/// Global theme state instance
static THEME_STATE: OnceLock<ThemeState> = OnceLock::new();

/// Process-wide theme state, for code that has no [`ThemeContext`] at hand
pub struct ThemeState {
    resolver: ThemeResolver,
}

impl ThemeState {
    /// Initialize the global theme state (call once at app startup)
    ///
    /// Returns false if it was already initialized; the first resolver wins.
    pub fn init(resolver: ThemeResolver) -> bool {
        let installed = THEME_STATE.set(ThemeState { resolver }).is_ok();
        if !installed {
            tracing::warn!("ThemeState::init called twice, keeping the first resolver");
        }
        installed
    }

    /// Get the global theme state instance
    pub fn get() -> &'static ThemeState {
        THEME_STATE
            .get()
            .expect("ThemeState not initialized. Call ThemeState::init() at app startup.")
    }

    /// Try to get the global theme state (returns None if not initialized)
    pub fn try_get() -> Option<&'static ThemeState> {
        THEME_STATE.get()
    }

    pub fn resolver(&self) -> &ThemeResolver {
        &self.resolver
    }

    /// A context carrying the global resolver
    pub fn context(&self) -> ThemeContext {
        ThemeContext::with_resolver(self.resolver.clone())
    }
}
