// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration service trait definition.
//!
//! This module defines the `ConfigurationService` trait, the port through which
//! callers read and write configuration without caring how the document behind
//! it is stored.

use crate::domain::{ConfigError, ConfigKey, ConfigValue, FromConfigValue, Result};

/// The main configuration service trait.
///
/// Implementors provide raw access to values; the typed accessors are provided
/// on top of it. Methods take `&self` because implementations are expected to
/// be shared (the process-wide store is a `&'static` reference).
///
/// # Examples
///
/// ```rust
/// use jsoncfg::domain::{ConfigKey, ConfigValue, ConfigurationService, Result};
/// use std::collections::HashMap;
/// use std::sync::Mutex;
///
/// #[derive(Default)]
/// struct MapService(Mutex<HashMap<ConfigKey, ConfigValue>>);
///
/// impl ConfigurationService for MapService {
///     fn get_value(&self, key: &ConfigKey) -> Option<ConfigValue> {
///         self.0.lock().ok()?.get(key).cloned()
///     }
///
///     fn set_value(&self, key: &ConfigKey, value: ConfigValue) {
///         if let Ok(mut map) = self.0.lock() {
///             map.insert(key.clone(), value);
///         }
///     }
///
///     fn reload(&self) -> Result<()> {
///         Ok(())
///     }
/// }
///
/// let service = MapService::default();
/// service.set_value(&ConfigKey::from("port"), ConfigValue::from(8080));
/// assert_eq!(service.get_or("port", 0u16), 8080);
/// assert_eq!(service.get_or("missing", 7u16), 7);
/// ```
pub trait ConfigurationService {
    /// Returns a copy of the value stored at `key`, if any.
    fn get_value(&self, key: &ConfigKey) -> Option<ConfigValue>;

    /// Inserts or overwrites the value at `key`.
    fn set_value(&self, key: &ConfigKey, value: ConfigValue);

    /// Re-reads the backing document from wherever it was last loaded.
    fn reload(&self) -> Result<()>;

    /// Checks whether `key` resolves to a value.
    fn has(&self, key: &ConfigKey) -> bool {
        self.get_value(key).is_some()
    }

    /// Retrieves `key` converted to `T`.
    ///
    /// # Errors
    ///
    /// * `ConfigKeyNotFound` - no value is stored at `key`
    /// * `TypeConversionError` - the value cannot be represented as `T`
    fn try_get_as<T>(&self, key: impl Into<ConfigKey>) -> Result<T>
    where
        Self: Sized,
        T: FromConfigValue,
    {
        let key = key.into();
        let value = self
            .get_value(&key)
            .ok_or_else(|| ConfigError::ConfigKeyNotFound {
                key: key.as_str().to_string(),
            })?;
        value.convert(key.as_str())
    }

    /// Retrieves `key` converted to `T`, or `default` when the key is absent
    /// or holds an incompatible value. Never fails.
    fn get_or<T>(&self, key: impl Into<ConfigKey>, default: T) -> T
    where
        Self: Sized,
        T: FromConfigValue,
    {
        let key = key.into();
        match self.try_get_as(&key) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!("Using default for '{}': {}", key, e);
                default
            }
        }
    }
}
