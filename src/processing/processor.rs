// SPDX-License-Identifier: MIT OR Apache-2.0

//! Named processing instance.

use crate::processing::ItemProcessor;
use crate::service::ConfigStore;
use std::path::Path;

/// A named processor that can be initialized from a configuration file.
///
/// Cloning produces an independent instance: renaming a clone leaves the
/// original untouched.
///
/// # Examples
///
/// ```rust
/// use jsoncfg::processing::Processor;
/// use jsoncfg::service::ConfigStore;
///
/// let store = ConfigStore::new();
/// let mut processor = Processor::new("example_core");
/// assert!(processor.initialize(&store, None));
///
/// let squared = processor.process_items(&[1, 2, 3], |x| x * x);
/// assert_eq!(squared, vec![1, 4, 9]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Processor {
    name: String,
    initialized: bool,
}

impl Processor {
    /// Creates an uninitialized processor.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        tracing::debug!("Creating processor instance with name: {}", name);
        Self {
            name,
            initialized: false,
        }
    }

    /// Returns the processor's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the processor.
    pub fn set_name(&mut self, new_name: impl Into<String>) {
        let new_name = new_name.into();
        tracing::info!("Changing name from '{}' to '{}'", self.name, new_name);
        self.name = new_name;
    }

    /// Returns `true` once [`initialize`](Self::initialize) has succeeded.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Marks the processor as initialized, loading `config_path` into `store`
    /// first when one is given.
    ///
    /// Returns `false`, and stays uninitialized, if the configuration cannot
    /// be loaded.
    pub fn initialize(&mut self, store: &ConfigStore, config_path: Option<&Path>) -> bool {
        if let Some(path) = config_path {
            if !store.load(path) {
                tracing::warn!("Failed to load configuration from: {}", path.display());
                return false;
            }
        }

        self.initialized = true;
        tracing::info!("Processor '{}' initialized successfully", self.name);
        true
    }

    /// Applies `f` to every item. See [`ItemProcessor::apply`].
    pub fn process_items<T, F>(&self, items: &[T], f: F) -> Vec<T>
    where
        F: Fn(&T) -> T,
    {
        ItemProcessor::apply(items, f)
    }

    /// Returns the library version as `"major.minor.patch"`.
    pub fn version() -> String {
        format!(
            "{}.{}.{}",
            env!("CARGO_PKG_VERSION_MAJOR"),
            env!("CARGO_PKG_VERSION_MINOR"),
            env!("CARGO_PKG_VERSION_PATCH")
        )
    }
}
