//! Theme context handed down the view tree

use crate::preference::ThemePreference;
use crate::resolver::ThemeResolver;
use folio_core::ColorScheme;

/// Access point for views that read or change the theme
///
/// A provider creates the context with a resolver; views receive clones.
/// A view asking for the resolver in a context without one is a wiring
/// mistake and panics.
#[derive(Clone, Debug, Default)]
pub struct ThemeContext {
    resolver: Option<ThemeResolver>,
}

impl ThemeContext {
    /// Context with no resolver provided
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resolver(resolver: ThemeResolver) -> Self {
        Self {
            resolver: Some(resolver),
        }
    }

    /// Provide (or replace) the resolver for this subtree
    pub fn provide(&mut self, resolver: ThemeResolver) {
        self.resolver = Some(resolver);
    }

    /// The resolver for this subtree
    ///
    /// # Panics
    ///
    /// Panics if no resolver was provided.
    pub fn resolver(&self) -> &ThemeResolver {
        self.resolver
            .as_ref()
            .expect("ThemeContext has no ThemeResolver. Provide one with ThemeContext::with_resolver() above this view.")
    }

    pub fn try_resolver(&self) -> Option<&ThemeResolver> {
        self.resolver.as_ref()
    }

    pub fn preference(&self) -> ThemePreference {
        self.resolver().get_preference()
    }

    pub fn resolved(&self) -> ColorScheme {
        self.resolver().resolved()
    }

    pub fn set_preference(&self, preference: ThemePreference) {
        self.resolver().set_preference(preference);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::RootStyle;
    use crate::store::MemoryStore;
    use crate::system::SystemSchemeSignal;
    use std::sync::Arc;

    #[test]
    #[should_panic(expected = "ThemeContext has no ThemeResolver")]
    fn test_missing_resolver_panics() {
        let ctx = ThemeContext::new();
        let _ = ctx.resolved();
    }

    #[test]
    fn test_clones_share_the_resolver() {
        let resolver = ThemeResolver::new(
            Arc::new(MemoryStore::new()),
            Arc::new(SystemSchemeSignal::new(ColorScheme::Light)),
            Arc::new(RootStyle::new()),
        );
        let ctx = ThemeContext::with_resolver(resolver);
        let child = ctx.clone();

        child.set_preference(ThemePreference::Dark);
        assert_eq!(ctx.resolved(), ColorScheme::Dark);
        assert!(ThemeContext::new().try_resolver().is_none());
    }
}
