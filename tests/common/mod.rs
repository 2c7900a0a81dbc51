// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared fixtures for the integration tests.

use jsoncfg::domain::{ConfigError, ConfigValue, Document, Result};
use jsoncfg::ports::DocumentSource;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::NamedTempFile;

/// The document used by the configuration walkthrough tests.
#[allow(dead_code)]
pub const SAMPLE_CONFIG: &str = r#"{
    "application": {
        "name": "Configuration Example",
        "version": "1.0.0",
        "debug": true
    },
    "database": {
        "host": "localhost",
        "port": 5432,
        "name": "example_db",
        "timeout": 30.0
    },
    "processing": {
        "max_threads": 8,
        "batch_size": 1000,
        "enabled_features": ["feature_a", "feature_b", "feature_c"]
    }
}"#;

/// Writes `content` to a temporary file that is deleted on drop.
#[allow(dead_code)]
pub fn create_temp_json(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

/// An in-memory document source that counts how often it is loaded.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct MockDocumentSource {
    document: Document,
    should_fail: bool,
    loads: AtomicUsize,
}

#[allow(dead_code)]
impl MockDocumentSource {
    /// Creates a source that yields the given JSON object.
    pub fn from_json(json: serde_json::Value) -> Self {
        let document = Document::from_value(ConfigValue::from(json)).unwrap();
        Self {
            document,
            ..Self::default()
        }
    }

    /// Creates a source whose every load fails.
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Number of times `load` has been called.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl DocumentSource for MockDocumentSource {
    fn name(&self) -> &str {
        "mock"
    }

    fn load(&self) -> Result<Document> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            Err(ConfigError::source_error("mock", "Mock load failure", None))
        } else {
            Ok(self.document.clone())
        }
    }
}
