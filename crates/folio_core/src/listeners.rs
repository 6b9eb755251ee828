//! Keyed listener registry
//!
//! A set of callbacks that can be removed individually by key. Used for
//! theme change subscriptions, OS color-scheme listeners and container
//! resize observers.
//!
//! Callbacks are cloned out of the registry before they run, so a callback
//! may register or remove listeners (including itself) without deadlocking.

use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex};

new_key_type! {
    /// Handle for removing a registered listener
    pub struct ListenerKey;
}

type Callback<A> = Arc<dyn Fn(&A) + Send + Sync>;

/// Registry of callbacks receiving `&A`
pub struct Listeners<A> {
    callbacks: Mutex<SlotMap<ListenerKey, Callback<A>>>,
}

impl<A> Listeners<A> {
    pub fn new() -> Self {
        Self {
            callbacks: Mutex::new(SlotMap::with_key()),
        }
    }

    /// Register a callback
    pub fn insert<F>(&self, callback: F) -> ListenerKey
    where
        F: Fn(&A) + Send + Sync + 'static,
    {
        self.lock().insert(Arc::new(callback))
    }

    /// Remove a callback. Returns false if the key was already removed.
    pub fn remove(&self, key: ListenerKey) -> bool {
        self.lock().remove(key).is_some()
    }

    pub fn contains(&self, key: ListenerKey) -> bool {
        self.lock().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Invoke every registered callback once
    ///
    /// Freed slots are reused, so the call order is not the registration order.
    pub fn notify(&self, value: &A) {
        let snapshot: Vec<(ListenerKey, Callback<A>)> = self
            .lock()
            .iter()
            .map(|(key, cb)| (key, Arc::clone(cb)))
            .collect();

        tracing::trace!("notifying {} listeners", snapshot.len());

        for (key, callback) in snapshot {
            // A previous callback may have removed this one
            if self.contains(key) {
                callback(value);
            }
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SlotMap<ListenerKey, Callback<A>>> {
        // Callbacks never run under this lock, so a poisoned lock still holds a consistent map
        self.callbacks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<A> Default for Listeners<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_insert_notify_remove() {
        let listeners: Listeners<u32> = Listeners::new();
        let total = Arc::new(AtomicUsize::new(0));

        let total_clone = total.clone();
        let key = listeners.insert(move |v| {
            total_clone.fetch_add(*v as usize, Ordering::SeqCst);
        });

        listeners.notify(&3);
        assert_eq!(total.load(Ordering::SeqCst), 3);

        assert!(listeners.remove(key));
        assert!(!listeners.remove(key));
        listeners.notify(&5);
        assert_eq!(total.load(Ordering::SeqCst), 3);
        assert!(listeners.is_empty());
    }

    #[test]
    fn test_reused_slot_is_notified_once() {
        let listeners: Listeners<()> = Listeners::new();
        let calls = Arc::new(Mutex::new(Vec::new()));

        let first = listeners.insert(|_| {});
        for name in ["second", "third"] {
            let calls = calls.clone();
            listeners.insert(move |_| calls.lock().unwrap().push(name));
        }
        listeners.remove(first);
        let calls_clone = calls.clone();
        listeners.insert(move |_| calls_clone.lock().unwrap().push("late"));

        listeners.notify(&());
        let mut seen = calls.lock().unwrap().clone();
        seen.sort_unstable();
        assert_eq!(seen, vec!["late", "second", "third"]);
    }

    #[test]
    fn test_callback_can_remove_another_listener() {
        let listeners: Arc<Listeners<()>> = Arc::new(Listeners::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let victim_key = Arc::new(Mutex::new(None::<ListenerKey>));

        let registry = listeners.clone();
        let victim = victim_key.clone();
        listeners.insert(move |_| {
            if let Some(key) = victim.lock().unwrap().take() {
                registry.remove(key);
            }
        });

        let calls_clone = calls.clone();
        let key = listeners.insert(move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });
        *victim_key.lock().unwrap() = Some(key);

        listeners.notify(&());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(listeners.len(), 1);
    }
}
