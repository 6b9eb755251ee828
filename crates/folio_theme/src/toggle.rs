//! Theme cycling control

use crate::context::ThemeContext;
use crate::preference::ThemePreference;
use crate::resolver::ThemeResolver;
use folio_core::{KeyCode, KeyEvent};

/// Keyboard shortcut hint shown next to the control
pub const SHORTCUT_HINT: &str = "Ctrl+K";

/// Button that cycles light, dark, system on click or `Ctrl+K` / `Cmd+K`
#[derive(Clone, Debug)]
pub struct ThemeToggle {
    resolver: ThemeResolver,
}

impl ThemeToggle {
    pub fn new(resolver: ThemeResolver) -> Self {
        Self { resolver }
    }

    /// # Panics
    ///
    /// Panics if the context has no resolver.
    pub fn from_context(ctx: &ThemeContext) -> Self {
        Self::new(ctx.resolver().clone())
    }

    /// Click handler. Returns the new preference.
    pub fn cycle(&self) -> ThemePreference {
        self.resolver.cycle()
    }

    /// Window key handler; consumes `Ctrl+K` / `Cmd+K`
    pub fn handle_key(&self, event: &mut KeyEvent) -> bool {
        if event.handled || event.key != KeyCode::K || !event.modifiers.ctrl_or_meta() {
            return false;
        }
        event.mark_handled();
        let preference = self.cycle();
        tracing::debug!("theme shortcut -> {}", preference);
        true
    }

    pub fn current(&self) -> ThemePreference {
        self.resolver.get_preference()
    }

    /// Accessible label
    pub fn label(&self) -> String {
        format!("Toggle theme (current: {})", self.current())
    }

    /// Hover title
    pub fn title(&self) -> String {
        format!("Current theme: {} ({})", self.current(), SHORTCUT_HINT)
    }

    /// Tooltip describing what a click does next
    pub fn hint(&self) -> String {
        format!("Switch to {}", self.current().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::RootStyle;
    use crate::store::MemoryStore;
    use crate::system::SystemSchemeSignal;
    use folio_core::{ColorScheme, Modifiers};
    use std::sync::Arc;

    fn toggle() -> ThemeToggle {
        ThemeToggle::new(ThemeResolver::new(
            Arc::new(MemoryStore::with_value("theme", "light")),
            Arc::new(SystemSchemeSignal::new(ColorScheme::Dark)),
            Arc::new(RootStyle::new()),
        ))
    }

    #[test]
    fn test_texts_follow_preference() {
        let toggle = toggle();
        assert_eq!(toggle.label(), "Toggle theme (current: light)");
        assert_eq!(toggle.title(), "Current theme: light (Ctrl+K)");
        assert_eq!(toggle.hint(), "Switch to dark");

        toggle.cycle();
        assert_eq!(toggle.hint(), "Switch to system");
        toggle.cycle();
        assert_eq!(toggle.hint(), "Switch to light");
    }

    #[test]
    fn test_shortcut_with_ctrl_or_cmd() {
        let toggle = toggle();

        let mut ctrl_k = KeyEvent::new(KeyCode::K, Modifiers::ctrl_only());
        assert!(toggle.handle_key(&mut ctrl_k));
        assert!(ctrl_k.handled);
        assert_eq!(toggle.current(), ThemePreference::Dark);

        let mut cmd_k = KeyEvent::new(KeyCode::K, Modifiers::meta_only());
        assert!(toggle.handle_key(&mut cmd_k));
        assert_eq!(toggle.current(), ThemePreference::System);

        // Already handled, plain K, and Ctrl+L are ignored
        assert!(!toggle.handle_key(&mut cmd_k));
        let mut plain_k = KeyEvent::new(KeyCode::K, Modifiers::NONE);
        assert!(!toggle.handle_key(&mut plain_k));
        let mut ctrl_l = KeyEvent::new(KeyCode::L, Modifiers::ctrl_only());
        assert!(!toggle.handle_key(&mut ctrl_l));
        assert_eq!(toggle.current(), ThemePreference::System);
    }
}
