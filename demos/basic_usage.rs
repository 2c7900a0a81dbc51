// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the processing types.
//!
//! This example demonstrates:
//! - Creating and renaming a named processor
//! - Initializing it without a configuration file
//! - Mapping a function over integers and strings
//! - Reading and writing the process-wide store
//!
//! To run this example:
//! ```bash
//! cargo run --example basic_usage
//! ```

use jsoncfg::prelude::*;
use jsoncfg::service;

fn main() {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== jsoncfg: Basic Usage ===\n");
    println!("Library version: {}\n", Processor::version());

    let mut processor = Processor::new("ExampleCore");
    println!("Created processor: {}", processor.name());

    if !processor.initialize(service::global(), None) {
        eprintln!("Failed to initialize processor");
        std::process::exit(1);
    }
    println!("Processor initialized\n");

    println!("--- Example 1: Integers ---");
    let numbers = vec![1, 2, 3, 4, 5];
    let squared = processor.process_items(&numbers, |x| x * x);
    println!("  input:   {:?}", numbers);
    println!("  squared: {:?}\n", squared);

    println!("--- Example 2: Strings ---");
    let words = vec!["hello".to_string(), "world".to_string(), "rust".to_string()];
    let shouted = ItemProcessor::apply(&words, |s| s.to_uppercase());
    println!("  input:     {:?}", words);
    println!("  uppercase: {:?}\n", shouted);

    println!("--- Example 3: Global configuration ---");
    service::set("example.key", "example_value");
    service::set("example.number", 42);
    println!(
        "  example.key    = {}",
        service::get("example.key", "default".to_string())
    );
    println!("  example.number = {}", service::get("example.number", 0));
    println!(
        "  example.absent = {}\n",
        service::get("example.absent", "fallback".to_string())
    );

    processor.set_name("ModifiedCore");
    println!("Processor renamed to: {}", processor.name());

    println!("\n=== Example Complete ===");
}
