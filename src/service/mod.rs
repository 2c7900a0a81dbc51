// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the configuration store.

pub mod config_store;
pub mod global;

pub use config_store::ConfigStore;
pub use global::{get, global, load, set};
