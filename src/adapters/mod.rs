// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing document source implementations.
//!
//! Each adapter implements [`DocumentSource`](crate::ports::DocumentSource) for
//! one file format. JSON is always available; YAML requires the `yaml` feature.

pub mod file;
pub mod json_file;
#[cfg(feature = "yaml")]
pub mod yaml_file;

pub use json_file::{JsonFileAdapter, JsonParser};
#[cfg(feature = "yaml")]
pub use yaml_file::{YamlFileAdapter, YamlParser};

use crate::domain::Result;
use crate::ports::DocumentSource;
use std::path::Path;

/// Picks a file adapter for `path` based on its extension.
///
/// `.yaml` and `.yml` files are read as YAML when the `yaml` feature is
/// enabled; everything else is read as JSON.
///
/// # Examples
///
/// ```rust,no_run
/// use jsoncfg::adapters::file_adapter_for;
///
/// let source = file_adapter_for("settings.json").unwrap();
/// assert_eq!(source.name(), "json-file");
/// ```
pub fn file_adapter_for(path: impl AsRef<Path>) -> Result<Box<dyn DocumentSource>> {
    let path = path.as_ref();

    #[cfg(feature = "yaml")]
    {
        use crate::ports::DocumentParser;
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| YamlParser::new().supports(ext));
        if is_yaml {
            return Ok(Box::new(YamlFileAdapter::from_file(path)?));
        }
    }

    Ok(Box::new(JsonFileAdapter::from_file(path)?))
}
