// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module contains the configuration document model: keys, values,
//! the document tree and the errors shared by every other layer. It does not
//! touch the filesystem.

pub mod config_key;
pub mod config_value;
pub mod document;
pub mod errors;
pub mod service;

// Re-export commonly used types
pub use config_key::ConfigKey;
pub use config_value::{ConfigValue, FromConfigValue, Table};
pub use document::Document;
pub use errors::{ConfigError, Result};
pub use service::ConfigurationService;
