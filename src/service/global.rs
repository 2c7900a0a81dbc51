// SPDX-License-Identifier: MIT OR Apache-2.0

//! The process-wide configuration store.
//!
//! Most code should own a [`ConfigStore`] and pass it where it is needed. For
//! programs that want one shared store, these functions operate on a single
//! lazily created instance that lives for the rest of the process.

use crate::domain::{ConfigKey, ConfigValue, FromConfigValue};
use crate::service::ConfigStore;
use once_cell::sync::Lazy;
use std::path::Path;

static GLOBAL_STORE: Lazy<ConfigStore> = Lazy::new(ConfigStore::new);

/// Returns the process-wide store.
///
/// # Examples
///
/// ```rust
/// use jsoncfg::service;
///
/// service::set("greeting.text", "hello");
/// assert_eq!(service::global().get("greeting.text", String::new()), "hello");
/// ```
pub fn global() -> &'static ConfigStore {
    &GLOBAL_STORE
}

/// Loads the file at `path` into the process-wide store.
///
/// See [`ConfigStore::load`].
pub fn load(path: impl AsRef<Path>) -> bool {
    global().load(path)
}

/// Reads `key` from the process-wide store, falling back to `default`.
///
/// See [`ConfigStore::get`].
pub fn get<T: FromConfigValue>(key: impl Into<ConfigKey>, default: T) -> T {
    global().get(key, default)
}

/// Writes `key` into the process-wide store.
///
/// See [`ConfigStore::set`].
pub fn set<V: Into<ConfigValue>>(key: impl Into<ConfigKey>, value: V) {
    global().set(key, value)
}
