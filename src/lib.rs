// SPDX-License-Identifier: MIT OR Apache-2.0

//! A document-backed key/value configuration store and a generic item processor.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: keys, values, the document tree and errors
//!   (`ConfigKey`, `ConfigValue`, `Document`, `ConfigError`)
//! - **Ports**: traits for parsing and sourcing documents
//!   (`DocumentParser`, `DocumentSource`)
//! - **Adapters**: JSON and YAML file sources
//! - **Service**: the `ConfigStore` and the process-wide instance
//! - **Processing**: the element-wise `ItemProcessor` and the named `Processor`
//!
//! # Key addressing
//!
//! Keys are strings. A lookup first tries the key verbatim at the top level;
//! if nothing is there, a dotted key such as `database.port` walks nested
//! documents, and numeric segments index into sequences. Writes create the
//! nested path unless a top-level entry with the exact key already exists.
//!
//! # Feature Flags
//!
//! - `yaml`: YAML file support
//! - `parallel`: `ItemProcessor::par_apply` on the rayon thread pool
//! - `full`: all of the above
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use jsoncfg::prelude::*;
//!
//! let store = ConfigStore::new();
//! if !store.load("config.json") {
//!     eprintln!("running with built-in defaults");
//! }
//!
//! let port: u16 = store.get("database.port", 5432);
//! let debug = store.get("debug", false);
//! store.set("runtime.user", "example_user");
//!
//! let doubled = ItemProcessor::apply(&[1, 2, 3], |x| x * 2);
//! # let _ = (port, debug, doubled);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod processing;
pub mod service;

/// The crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        ConfigError, ConfigKey, ConfigValue, ConfigurationService, Document, FromConfigValue,
        Result,
    };
    pub use crate::ports::{DocumentParser, DocumentSource};
    pub use crate::processing::{ItemProcessor, Processor};
    pub use crate::service::ConfigStore;

    pub use crate::adapters::{JsonFileAdapter, JsonParser};
    #[cfg(feature = "yaml")]
    pub use crate::adapters::{YamlFileAdapter, YamlParser};
}
