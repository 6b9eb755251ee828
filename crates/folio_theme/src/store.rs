//! Preference persistence
//!
//! The stored value is the raw preference literal under a single key.
//! Every store failure is recoverable: readers fall back to
//! [`ThemePreference::System`].

use crate::error::{Result, ThemeError};
use crate::preference::ThemePreference;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

/// Default key the preference is stored under
pub const DEFAULT_STORAGE_KEY: &str = "theme";

/// Client-local key/value storage
pub trait PreferenceStore: Send + Sync {
    /// Read the value under `key`, `None` if absent
    fn read(&self, key: &str) -> Result<Option<String>>;

    fn write(&self, key: &str, value: &str) -> Result<()>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Arc<T> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }
}

/// Read the persisted preference, treating absence, invalid values and
/// storage failures as `system`
pub fn load_preference(store: &dyn PreferenceStore, key: &str) -> ThemePreference {
    match store.read(key) {
        Ok(Some(value)) => ThemePreference::from_stored(&value).unwrap_or_else(|| {
            tracing::warn!("ignoring invalid stored theme preference {:?}", value);
            ThemePreference::System
        }),
        Ok(None) => ThemePreference::System,
        Err(e) => {
            tracing::warn!("theme preference unreadable, using system: {}", e);
            ThemePreference::System
        }
    }
}

/// Process-local store
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<FxHashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with one entry
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store.entries().insert(key.into(), value.into());
        store
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, FxHashMap<String, String>> {
        self.values.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// TOML key/value file, e.g. `~/.config/folio/preferences.toml`
///
/// Writes read the whole table, update one key and write it back, so
/// unrelated keys survive.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> ThemeError {
        ThemeError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn load_table(&self) -> Result<BTreeMap<String, String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}

impl PreferenceStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load_table()?.remove(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut table = self.load_table()?;
        table.insert(key.to_string(), value.to_string());
        let content = toml::to_string(&table)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }
        std::fs::write(&self.path, content).map_err(|e| self.io_error(e))?;
        tracing::debug!("stored {} = {} in {}", key, value, self.path.display());
        Ok(())
    }
}

/// Storage that is disabled or blocked (private browsing, sandbox)
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableStore;

impl PreferenceStore for UnavailableStore {
    fn read(&self, _key: &str) -> Result<Option<String>> {
        Err(ThemeError::StorageUnavailable("storage is disabled".to_string()))
    }

    fn write(&self, _key: &str, _value: &str) -> Result<()> {
        Err(ThemeError::StorageUnavailable("storage is disabled".to_string()))
    }
}
