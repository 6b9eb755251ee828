//! OS color-scheme signal

use folio_core::{ColorScheme, ListenerKey, Listeners};
use std::sync::{PoisonError, RwLock};

/// Environment variable that forces the detected scheme
pub const SCHEME_OVERRIDE_ENV: &str = "FOLIO_COLOR_SCHEME";

/// Callback invoked with the new OS scheme
pub type SchemeListener = Box<dyn Fn(&ColorScheme) + Send + Sync>;

/// The OS dark/light media signal
pub trait SystemScheme: Send + Sync {
    /// Current OS scheme
    fn current(&self) -> ColorScheme;

    /// Be notified when the OS scheme changes
    fn subscribe(&self, listener: SchemeListener) -> ListenerKey;

    fn unsubscribe(&self, key: ListenerKey);
}

/// In-process OS scheme signal
///
/// The platform layer (or a test) calls [`SystemSchemeSignal::set`] when the
/// desktop switches between light and dark.
pub struct SystemSchemeSignal {
    scheme: RwLock<ColorScheme>,
    listeners: Listeners<ColorScheme>,
}

impl SystemSchemeSignal {
    pub fn new(initial: ColorScheme) -> Self {
        Self {
            scheme: RwLock::new(initial),
            listeners: Listeners::new(),
        }
    }

    /// Signal seeded from [`detect_system_color_scheme`]
    pub fn detect() -> Self {
        Self::new(detect_system_color_scheme())
    }

    /// Report a new OS scheme; listeners run only if it changed
    pub fn set(&self, scheme: ColorScheme) {
        {
            let mut current = self.scheme.write().unwrap_or_else(PoisonError::into_inner);
            if *current == scheme {
                return;
            }
            *current = scheme;
        }
        tracing::debug!("system color scheme changed to {}", scheme);
        self.listeners.notify(&scheme);
    }

    /// Number of attached listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Default for SystemSchemeSignal {
    fn default() -> Self {
        Self::new(ColorScheme::Light)
    }
}

impl SystemScheme for SystemSchemeSignal {
    fn current(&self) -> ColorScheme {
        *self.scheme.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn subscribe(&self, listener: SchemeListener) -> ListenerKey {
        self.listeners.insert(listener)
    }

    fn unsubscribe(&self, key: ListenerKey) {
        self.listeners.remove(key);
    }
}

/// Detect the desktop color scheme
///
/// `FOLIO_COLOR_SCHEME=light|dark` wins; otherwise a `GTK_THEME` ending in
/// `:dark` means dark. Anything else is light.
pub fn detect_system_color_scheme() -> ColorScheme {
    let override_value = std::env::var(SCHEME_OVERRIDE_ENV).ok();
    let gtk_theme = std::env::var("GTK_THEME").ok();
    scheme_from_hints(override_value.as_deref(), gtk_theme.as_deref())
}

fn scheme_from_hints(override_value: Option<&str>, gtk_theme: Option<&str>) -> ColorScheme {
    if let Some(value) = override_value {
        match value.parse::<ColorScheme>() {
            Ok(scheme) => return scheme,
            Err(e) => tracing::warn!("ignoring {}: {}", SCHEME_OVERRIDE_ENV, e),
        }
    }

    let prefers_dark = gtk_theme
        .map(|theme| theme.to_ascii_lowercase().ends_with(":dark"))
        .unwrap_or(false);
    ColorScheme::from_prefers_dark(prefers_dark)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_hints() {
        assert_eq!(scheme_from_hints(None, None), ColorScheme::Light);
        assert_eq!(
            scheme_from_hints(None, Some("Adwaita:dark")),
            ColorScheme::Dark
        );
        assert_eq!(scheme_from_hints(None, Some("Adwaita")), ColorScheme::Light);
        assert_eq!(
            scheme_from_hints(Some("dark"), Some("Adwaita")),
            ColorScheme::Dark
        );
        assert_eq!(
            scheme_from_hints(Some("light"), Some("Adwaita:dark")),
            ColorScheme::Light
        );
        assert_eq!(
            scheme_from_hints(Some("purple"), Some("Adwaita:dark")),
            ColorScheme::Dark
        );
    }

    #[test]
    fn test_set_notifies_only_on_change() {
        let signal = SystemSchemeSignal::new(ColorScheme::Light);
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = calls.clone();
        let key = signal.subscribe(Box::new(move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        }));

        signal.set(ColorScheme::Light);
        signal.set(ColorScheme::Dark);
        signal.set(ColorScheme::Dark);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(signal.current(), ColorScheme::Dark);

        signal.unsubscribe(key);
        signal.set(ColorScheme::Light);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(signal.listener_count(), 0);
    }
}
