//! Folio Theme System
//!
//! Light/dark/system display-mode preference with OS scheme tracking and
//! persisted preference.
//!
//! # Overview
//!
//! - **Preference**: [`ThemePreference`] (`light`, `dark`, `system`) and the
//!   pure [`resolve`] function that maps it to a [`ColorScheme`]
//! - **Resolver**: [`ThemeResolver`], the single source of truth, applying
//!   the resolved scheme to the document root and notifying subscribers
//! - **Stores**: [`MemoryStore`], [`FileStore`], [`UnavailableStore`]
//! - **OS signal**: [`SystemSchemeSignal`] and [`detect_system_color_scheme`]
//! - **Bootstrap**: [`apply_initial_theme`] for the first paint
//! - **Access**: [`ThemeContext`] for views, [`ThemeState`] for process-wide use
//!
//! # Quick Start
//!
//! ```rust
//! use folio_core::ColorScheme;
//! use folio_theme::{
//!     MemoryStore, RootStyle, SystemSchemeSignal, ThemePreference, ThemeResolver,
//! };
//! use std::sync::Arc;
//!
//! let os = Arc::new(SystemSchemeSignal::new(ColorScheme::Dark));
//! let root = Arc::new(RootStyle::new());
//! let resolver = ThemeResolver::new(Arc::new(MemoryStore::new()), os.clone(), root.clone());
//!
//! assert_eq!(resolver.get_preference(), ThemePreference::System);
//! assert_eq!(resolver.resolved(), ColorScheme::Dark);
//!
//! resolver.set_preference(ThemePreference::Light);
//! os.set(ColorScheme::Light);
//! os.set(ColorScheme::Dark);
//! assert_eq!(resolver.resolved(), ColorScheme::Light);
//! assert!(root.has_class("light"));
//! ```

pub mod bootstrap;
pub mod context;
pub mod document;
pub mod error;
pub mod preference;
pub mod resolver;
pub mod state;
pub mod store;
pub mod system;
pub mod toggle;

// Re-export commonly used types
pub use bootstrap::{apply_initial_theme, InitialTheme};
pub use context::ThemeContext;
pub use document::{DocumentStyle, RootStyle};
pub use error::{Result, ThemeError};
pub use folio_core::ColorScheme;
pub use preference::{resolve, ThemePreference};
pub use resolver::ThemeResolver;
pub use state::ThemeState;
pub use store::{
    load_preference, FileStore, MemoryStore, PreferenceStore, UnavailableStore,
    DEFAULT_STORAGE_KEY,
};
pub use system::{detect_system_color_scheme, SchemeListener, SystemScheme, SystemSchemeSignal};
pub use toggle::ThemeToggle;
