// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document-backed configuration store.
//!
//! `ConfigStore` owns one live [`Document`] behind a read/write lock. Loads
//! parse into a fresh document first and swap it in only on success, so a
//! failed load never leaves the store half-written.

use crate::adapters::file_adapter_for;
use crate::domain::{
    ConfigKey, ConfigValue, ConfigurationService, Document, FromConfigValue, Result,
};
use crate::ports::DocumentSource;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A key/value configuration store backed by a single document.
///
/// Reads never fail: [`get`](Self::get) falls back to the caller's default
/// when a key is missing or holds a value of another type. Writes always
/// succeed.
///
/// # Examples
///
/// ```rust
/// use jsoncfg::service::ConfigStore;
///
/// let store = ConfigStore::new();
/// store.set("database.port", 5432);
/// store.set("debug", true);
///
/// assert_eq!(store.get("database.port", 0), 5432);
/// assert!(store.get("debug", false));
/// assert_eq!(store.get("missing", "x".to_string()), "x");
/// ```
#[derive(Debug, Default)]
pub struct ConfigStore {
    state: RwLock<LiveState>,
}

/// The live document and where it came from. Both change under one lock.
#[derive(Debug, Default)]
struct LiveState {
    document: Document,
    /// Path of the last successful file load, used by `reload`
    source_path: Option<PathBuf>,
}

impl ConfigStore {
    /// Creates a store with an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that starts out with `document`.
    pub fn with_document(document: Document) -> Self {
        Self {
            state: RwLock::new(LiveState {
                document,
                source_path: None,
            }),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, LiveState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, LiveState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the whole document with the contents of the file at `path`.
    ///
    /// Returns `false` if the file cannot be opened or parsed; the current
    /// document is left untouched in that case.
    pub fn load(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        match self.try_load(path) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Error loading configuration from {}: {}", path.display(), e);
                false
            }
        }
    }

    /// Like [`load`](Self::load), but reports why the load failed.
    pub fn try_load(&self, path: impl AsRef<Path>) -> Result<()> {
        let source = file_adapter_for(path)?;
        self.load_from(source.as_ref())
    }

    /// Replaces the whole document with what `source` produces.
    ///
    /// The source's file, if it has one, becomes the target of later
    /// [`reload`](ConfigurationService::reload) calls.
    pub fn load_from(&self, source: &dyn DocumentSource) -> Result<()> {
        let document = source.load()?;
        let entries = document.len();
        *self.write() = LiveState {
            document,
            source_path: source.path().map(Path::to_path_buf),
        };

        match source.path() {
            Some(path) => tracing::info!("Configuration loaded from: {}", path.display()),
            None => tracing::info!("Configuration loaded from source '{}'", source.name()),
        }
        tracing::debug!("Loaded document has {} top-level entries", entries);
        Ok(())
    }

    /// Returns the path of the last file loaded successfully.
    pub fn source_path(&self) -> Option<PathBuf> {
        self.read().source_path.clone()
    }

    /// Returns the value at `key` converted to `T`, or `default` when the key
    /// is absent or not convertible.
    pub fn get<T: FromConfigValue>(&self, key: impl Into<ConfigKey>, default: T) -> T {
        self.get_or(key, default)
    }

    /// Returns the value at `key` converted to `T`.
    ///
    /// # Errors
    ///
    /// * `ConfigKeyNotFound` - nothing is stored at `key`
    /// * `TypeConversionError` - the stored value is not a `T`
    pub fn try_get<T: FromConfigValue>(&self, key: impl Into<ConfigKey>) -> Result<T> {
        self.try_get_as(key)
    }

    /// Inserts or overwrites `key`.
    pub fn set<V: Into<ConfigValue>>(&self, key: impl Into<ConfigKey>, value: V) {
        self.write().document.set(&key.into(), value.into());
    }

    /// Returns `true` if `key` resolves to a value.
    pub fn contains(&self, key: impl Into<ConfigKey>) -> bool {
        self.read().document.contains(&key.into())
    }

    /// Removes `key`, returning the value that was stored there.
    pub fn remove(&self, key: impl Into<ConfigKey>) -> Option<ConfigValue> {
        self.write().document.remove(&key.into())
    }

    /// Empties the document. The reload target is kept.
    pub fn clear(&self) {
        self.write().document.clear();
    }

    /// Lists every leaf of the document as a dotted key.
    pub fn keys(&self) -> Vec<ConfigKey> {
        self.read().document.keys()
    }

    /// Returns a deep copy of the live document.
    pub fn snapshot(&self) -> Document {
        self.read().document.clone()
    }
}

impl ConfigurationService for ConfigStore {
    fn get_value(&self, key: &ConfigKey) -> Option<ConfigValue> {
        self.read().document.get(key).cloned()
    }

    fn set_value(&self, key: &ConfigKey, value: ConfigValue) {
        self.write().document.set(key, value);
    }

    fn reload(&self) -> Result<()> {
        match self.source_path() {
            Some(path) => {
                self.try_load(&path)?;
                tracing::info!("Configuration reloaded from: {}", path.display());
                Ok(())
            }
            None => Ok(()),
        }
    }
}
