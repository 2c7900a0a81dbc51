// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tests for how dotted keys resolve against nested documents.

mod common;

use common::create_temp_json;
use jsoncfg::domain::{ConfigKey, ConfigValue};
use jsoncfg::service::ConfigStore;

fn loaded(content: &str) -> ConfigStore {
    let file = create_temp_json(content);
    let store = ConfigStore::new();
    assert!(store.load(file.path()));
    store
}

#[test]
fn test_flat_key_wins_over_nested_path() {
    let store = loaded(r#"{"a.b": "flat", "a": {"b": "nested"}}"#);
    assert_eq!(store.get("a.b", String::new()), "flat");
}

#[test]
fn test_nested_path_used_when_no_flat_key() {
    let store = loaded(r#"{"a": {"b": {"c": 3}}}"#);
    assert_eq!(store.get("a.b.c", 0), 3);
    assert!(!store.contains("a.b.c.d"));
    assert!(!store.contains("a.x"));
}

#[test]
fn test_numeric_segments_index_sequences() {
    let store = loaded(r#"{"servers": [{"host": "alpha"}, {"host": "beta"}]}"#);

    assert_eq!(store.get("servers.1.host", String::new()), "beta");
    assert_eq!(store.get("servers.2.host", "none".to_string()), "none");
    assert_eq!(store.get("servers.first.host", "none".to_string()), "none");
}

#[test]
fn test_set_overwrites_existing_flat_key() {
    let store = loaded(r#"{"a.b": 1}"#);
    store.set("a.b", 2);

    assert_eq!(store.get("a.b", 0), 2);
    assert_eq!(store.keys(), vec![ConfigKey::from("a.b")]);
}

#[test]
fn test_set_creates_nested_path() {
    let store = ConfigStore::new();
    store.set("runtime.session.id", 7);

    let snapshot = store.snapshot();
    let runtime = snapshot
        .as_table()
        .get("runtime")
        .and_then(ConfigValue::as_document)
        .unwrap();
    assert!(runtime.contains_key("session"));
    assert_eq!(store.get("runtime.session.id", 0), 7);
}

#[test]
fn test_set_replaces_scalar_intermediate() {
    let store = loaded(r#"{"runtime": "scalar"}"#);
    store.set("runtime.user", "someone");

    assert_eq!(store.get("runtime.user", String::new()), "someone");
    let snapshot = store.snapshot();
    let runtime = snapshot.get(&ConfigKey::from("runtime")).unwrap();
    assert_eq!(runtime.kind(), "document");
}

#[test]
fn test_set_into_sequence_element() {
    let store = loaded(r#"{"servers": [{"host": "alpha"}]}"#);
    store.set("servers.0.port", 8080);

    assert_eq!(store.get("servers.0.host", String::new()), "alpha");
    assert_eq!(store.get("servers.0.port", 0), 8080);
}

#[test]
fn test_remove_nested_leaf() {
    let store = loaded(r#"{"database": {"host": "localhost", "port": 5432}}"#);

    assert_eq!(store.remove("database.port"), Some(ConfigValue::Integer(5432)));
    assert!(!store.contains("database.port"));
    assert!(store.contains("database.host"));
}

#[test]
fn test_keys_are_flattened() {
    let store = loaded(r#"{"a": {"b": 1, "c": [true, false]}, "d": {}}"#);

    let keys: Vec<String> = store.keys().into_iter().map(String::from).collect();
    assert_eq!(keys, vec!["a.b", "a.c.0", "a.c.1", "d"]);
}
