// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generic item processing.
//!
//! [`ItemProcessor`] is the stateless element-wise map. [`Processor`] wraps it
//! in a named instance that can be initialized from a configuration file.
//! Neither depends on the process-wide store.

pub mod item_processor;
pub mod processor;

pub use item_processor::ItemProcessor;
pub use processor::Processor;
