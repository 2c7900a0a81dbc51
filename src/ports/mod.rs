// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! The traits here describe how documents are parsed and where they come from.
//! Concrete file formats live in the adapters layer.

pub mod parser;
pub mod source;

pub use parser::DocumentParser;
pub use source::DocumentSource;
