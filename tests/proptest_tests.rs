// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests use property-based testing to verify that the store and the
//! item processor behave for arbitrary inputs.

use jsoncfg::domain::{ConfigKey, ConfigValue, Document};
use jsoncfg::processing::ItemProcessor;
use jsoncfg::service::ConfigStore;
use proptest::prelude::*;

// Test that ConfigKey can be created from any string
proptest! {
    #[test]
    fn test_config_key_from_any_string(s in "\\PC*") {
        let key = ConfigKey::from(s.clone());
        prop_assert_eq!(key.as_str(), s.as_str());
    }
}

// Test that joining the segments reproduces the key
proptest! {
    #[test]
    fn test_segments_rejoin_to_key(s in "[a-z0-9.]{0,40}") {
        let key = ConfigKey::from(s.as_str());
        let joined = key.segments().collect::<Vec<_>>().join(".");
        prop_assert_eq!(joined, s);
    }
}

// Test that ConfigValue can be created from any string
proptest! {
    #[test]
    fn test_config_value_from_any_string(s in "\\PC*") {
        let value = ConfigValue::from(s.clone());
        prop_assert_eq!(value.as_str(), Some(s.as_str()));
    }
}

// Test that integers written to the store read back unchanged
proptest! {
    #[test]
    fn test_integer_set_get_roundtrip(key in "[a-z]{1,8}(\\.[a-z]{1,8}){0,3}", n in any::<i64>()) {
        let store = ConfigStore::new();
        store.set(key.as_str(), n);
        prop_assert_eq!(store.get(key.as_str(), 0i64), n);
    }
}

// Test that unsigned integers written to the store read back unchanged
proptest! {
    #[test]
    fn test_unsigned_set_get_roundtrip(key in "[a-z]{1,8}(\\.[a-z]{1,8}){0,3}", n in any::<u64>()) {
        let store = ConfigStore::new();
        store.set(key.as_str(), n);
        prop_assert_eq!(store.get(key.as_str(), 0u64), n);
    }
}

// Test that strings written to the store read back unchanged
proptest! {
    #[test]
    fn test_string_set_get_roundtrip(key in "[a-z_]{1,12}", s in "\\PC*") {
        let store = ConfigStore::new();
        store.set(key.as_str(), s.clone());
        prop_assert_eq!(store.get(key.as_str(), String::new()), s);
    }
}

// Test that booleans written to the store read back unchanged
proptest! {
    #[test]
    fn test_bool_set_get_roundtrip(key in "[a-z_]{1,12}", b in prop::bool::ANY) {
        let store = ConfigStore::new();
        store.set(key.as_str(), b);
        prop_assert_eq!(store.get(key.as_str(), !b), b);
    }
}

// Test that an empty store always yields the default
proptest! {
    #[test]
    fn test_missing_key_yields_default(key in "\\PC*", default in any::<i32>()) {
        let store = ConfigStore::new();
        prop_assert_eq!(store.get(key.as_str(), default), default);
    }
}

// Test that a mistyped value yields the default instead of failing
proptest! {
    #[test]
    fn test_mistyped_value_yields_default(s in "[a-z]{1,12}", default in any::<i32>()) {
        let store = ConfigStore::new();
        store.set("value", s);
        prop_assert_eq!(store.get("value", default), default);
    }
}

// Test that every key reported by a document resolves
proptest! {
    #[test]
    fn test_document_keys_resolve(
        entries in prop::collection::btree_map("[a-z]{1,6}(\\.[a-z]{1,6}){0,2}", any::<i32>(), 0..12)
    ) {
        let mut document = Document::new();
        for (key, value) in &entries {
            document.set(&ConfigKey::from(key.as_str()), ConfigValue::from(*value));
        }
        for key in document.keys() {
            prop_assert!(document.contains(&key));
        }
    }
}

// Test that apply preserves length and maps element-wise
proptest! {
    #[test]
    fn test_apply_is_element_wise(items in prop::collection::vec(any::<i32>(), 0..100)) {
        let result = ItemProcessor::apply(&items, |x| x.wrapping_mul(3));
        prop_assert_eq!(result.len(), items.len());
        for (input, output) in items.iter().zip(&result) {
            prop_assert_eq!(*output, input.wrapping_mul(3));
        }
    }
}

// Test that apply with the identity function returns the input
proptest! {
    #[test]
    fn test_apply_identity(items in prop::collection::vec("\\PC*", 0..20)) {
        let result = ItemProcessor::apply(&items, |s| s.clone());
        prop_assert_eq!(result, items);
    }
}
