//! Folio Core
//!
//! Shared primitives used by the theme and animation crates:
//!
//! - **Color schemes**: the resolved light/dark value applied to the UI
//! - **Listener registries**: keyed callback sets with explicit removal
//! - **Key events**: platform-agnostic key codes and modifier flags
//!
//! # Example
//!
//! ```rust
//! use folio_core::{ColorScheme, Listeners};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! let listeners: Listeners<ColorScheme> = Listeners::new();
//! let seen = Arc::new(AtomicUsize::new(0));
//! let seen_clone = seen.clone();
//! let key = listeners.insert(move |_scheme: &ColorScheme| {
//!     seen_clone.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! listeners.notify(&ColorScheme::Dark);
//! listeners.remove(key);
//! listeners.notify(&ColorScheme::Light);
//! assert_eq!(seen.load(Ordering::SeqCst), 1);
//! ```

pub mod events;
pub mod listeners;
pub mod scheme;

pub use events::{KeyCode, KeyEvent, Modifiers};
pub use listeners::{ListenerKey, Listeners};
pub use scheme::ColorScheme;
