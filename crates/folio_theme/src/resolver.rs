//! Theme resolver
//!
//! Single source of truth for the user's display-mode preference and the
//! light/dark scheme it resolves to.
//!
//! - The preference is persisted on every write and read once at creation.
//! - While the preference is `system` a listener on the OS signal is
//!   attached; it is detached for `light`/`dark` and signals arriving after
//!   detach are ignored.
//! - Subscribers are notified once per change of the resolved scheme, never
//!   for writes that resolve to the same value.
//! - No lock is held while subscriber callbacks run.

use crate::document::DocumentStyle;
use crate::preference::{resolve, ThemePreference};
use crate::store::{load_preference, PreferenceStore, DEFAULT_STORAGE_KEY};
use crate::system::SystemScheme;
use folio_core::{ColorScheme, ListenerKey, Listeners};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

#[derive(Debug)]
struct ResolverState {
    preference: ThemePreference,
    resolved: ColorScheme,
    os_listener: Option<ListenerKey>,
}

struct ResolverInner {
    storage_key: String,
    store: Arc<dyn PreferenceStore>,
    system: Arc<dyn SystemScheme>,
    document: Arc<dyn DocumentStyle>,
    state: Mutex<ResolverState>,
    subscribers: Listeners<ColorScheme>,
}

/// Cloneable handle to the theme resolver
///
/// Clones share state; the OS listener is released when the last clone drops.
#[derive(Clone)]
pub struct ThemeResolver {
    inner: Arc<ResolverInner>,
}

impl ThemeResolver {
    /// Resolver using the default `"theme"` storage key
    pub fn new(
        store: Arc<dyn PreferenceStore>,
        system: Arc<dyn SystemScheme>,
        document: Arc<dyn DocumentStyle>,
    ) -> Self {
        Self::with_storage_key(DEFAULT_STORAGE_KEY, store, system, document)
    }

    /// Read the stored preference, resolve it and apply it to the document
    ///
    /// If an early bootstrap already applied the same scheme the document
    /// sees no second transition.
    pub fn with_storage_key(
        storage_key: impl Into<String>,
        store: Arc<dyn PreferenceStore>,
        system: Arc<dyn SystemScheme>,
        document: Arc<dyn DocumentStyle>,
    ) -> Self {
        let storage_key = storage_key.into();
        let preference = load_preference(store.as_ref(), &storage_key);
        let resolved = resolve(preference, system.current());

        let inner = Arc::new(ResolverInner {
            storage_key,
            store,
            system,
            document,
            state: Mutex::new(ResolverState {
                preference,
                resolved,
                os_listener: None,
            }),
            subscribers: Listeners::new(),
        });

        if preference.follows_system() {
            let key = inner.attach_os_listener();
            inner.lock().os_listener = Some(key);
        }
        inner.document.apply_scheme(resolved);

        tracing::debug!(
            "ThemeResolver created - preference {}, resolved {}",
            preference,
            resolved
        );

        Self { inner }
    }

    /// Current preference; `system` unless a valid value was stored or set
    pub fn get_preference(&self) -> ThemePreference {
        self.inner.lock().preference
    }

    /// Current resolved scheme
    pub fn resolved(&self) -> ColorScheme {
        self.inner.lock().resolved
    }

    /// Persist and apply a new preference
    pub fn set_preference(&self, preference: ThemePreference) {
        self.inner.set_preference(preference);
    }

    /// Advance light, dark, system, light, ... Returns the new preference.
    pub fn cycle(&self) -> ThemePreference {
        let next = self.get_preference().next();
        self.set_preference(next);
        next
    }

    /// Be notified with the new scheme whenever the resolved scheme changes
    pub fn subscribe<F>(&self, callback: F) -> ListenerKey
    where
        F: Fn(&ColorScheme) + Send + Sync + 'static,
    {
        self.inner.subscribers.insert(callback)
    }

    pub fn unsubscribe(&self, key: ListenerKey) -> bool {
        self.inner.subscribers.remove(key)
    }

    /// Whether the OS signal listener is currently attached
    pub fn is_tracking_system(&self) -> bool {
        self.inner.lock().os_listener.is_some()
    }

    pub fn storage_key(&self) -> &str {
        &self.inner.storage_key
    }
}

impl std::fmt::Debug for ThemeResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.lock();
        f.debug_struct("ThemeResolver")
            .field("storage_key", &self.inner.storage_key)
            .field("preference", &state.preference)
            .field("resolved", &state.resolved)
            .field("tracking_system", &state.os_listener.is_some())
            .finish()
    }
}

impl ResolverInner {
    fn lock(&self) -> MutexGuard<'_, ResolverState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn attach_os_listener(self: &Arc<Self>) -> ListenerKey {
        let weak: Weak<Self> = Arc::downgrade(self);
        self.system.subscribe(Box::new(move |scheme| {
            if let Some(inner) = weak.upgrade() {
                inner.on_system_change(*scheme);
            }
        }))
    }

    fn set_preference(self: &Arc<Self>, preference: ThemePreference) {
        let (previous, resolved) = {
            let mut state = self.lock();
            state.preference = preference;

            if preference.follows_system() {
                if state.os_listener.is_none() {
                    state.os_listener = Some(self.attach_os_listener());
                }
            } else if let Some(key) = state.os_listener.take() {
                self.system.unsubscribe(key);
            }

            let resolved = resolve(preference, self.system.current());
            (std::mem::replace(&mut state.resolved, resolved), resolved)
        };

        if let Err(e) = self.store.write(&self.storage_key, preference.as_str()) {
            tracing::warn!("theme preference not persisted, keeping it in memory: {}", e);
        }

        self.document.apply_scheme(resolved);
        self.publish(previous, resolved);
    }

    fn on_system_change(&self, scheme: ColorScheme) {
        let previous = {
            let mut state = self.lock();
            // Stale delivery after the listener was detached
            if !state.preference.follows_system() || state.os_listener.is_none() {
                return;
            }
            std::mem::replace(&mut state.resolved, scheme)
        };

        self.document.apply_scheme(scheme);
        self.publish(previous, scheme);
    }

    fn publish(&self, previous: ColorScheme, resolved: ColorScheme) {
        if previous == resolved {
            return;
        }
        tracing::debug!("resolved theme {} -> {}", previous, resolved);
        self.subscribers.notify(&resolved);
    }
}

impl Drop for ResolverInner {
    fn drop(&mut self) {
        let key = self
            .state
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .os_listener
            .take();
        if let Some(key) = key {
            self.system.unsubscribe(key);
        }
    }
}
