// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration file example.
//!
//! This example demonstrates:
//! - Loading a JSON configuration file through a processor
//! - Reading nested values with dotted keys
//! - Falling back to defaults for missing keys
//! - Writing runtime values next to the loaded ones
//!
//! To run this example:
//! ```bash
//! cargo run --example config_usage
//! ```

use jsoncfg::prelude::*;
use std::fs;

const CONFIG: &str = r#"{
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

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    println!("=== jsoncfg: Configuration File Example ===\n");

    let dir = tempfile::tempdir()?;
    let config_path = dir.path().join("config.json");
    fs::write(&config_path, CONFIG)?;
    println!("Wrote sample configuration to {}\n", config_path.display());

    let store = ConfigStore::new();
    let mut processor = Processor::new("ConfigExample");
    if !processor.initialize(&store, Some(config_path.as_path())) {
        eprintln!("Failed to initialize with configuration file");
        std::process::exit(1);
    }

    println!("--- Application ---");
    println!(
        "  name:  {}",
        store.get("application.name", "Unknown App".to_string())
    );
    println!(
        "  version: {}",
        store.get("application.version", "0.0.0".to_string())
    );
    println!("  debug: {}\n", store.get("application.debug", false));

    println!("--- Database ---");
    println!("  host:    {}", store.get("database.host", "127.0.0.1".to_string()));
    println!("  port:    {}", store.get("database.port", 3306u16));
    println!("  timeout: {}s\n", store.get("database.timeout", 10.0));

    println!("--- Processing ---");
    println!("  max_threads: {}", store.get("processing.max_threads", 1usize));
    println!("  batch_size:  {}", store.get("processing.batch_size", 100usize));
    let features: Vec<String> = store.get("processing.enabled_features", Vec::new());
    println!("  features:    {}\n", features.join(", "));

    println!("--- Runtime values ---");
    store.set("runtime.user", "example_user");
    store.set("runtime.session_id", 12345);
    store.set("runtime.authenticated", true);
    for key in ["runtime.user", "runtime.session_id", "runtime.authenticated"] {
        if let Some(value) = store.get_value(&ConfigKey::from(key)) {
            println!("  {} = {}", key, value);
        }
    }

    let multiplier: i64 = store.get("processing.multiplier", 2);
    let scaled = processor.process_items(&[1, 2, 3, 4, 5], |x| x * multiplier);
    println!("\n  scaled by {}: {:?}", multiplier, scaled);

    println!("\nStore now holds {} keys", store.keys().len());

    println!("\n=== Example Complete ===");
    Ok(())
}
