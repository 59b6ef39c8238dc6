//! # Oxirow: immutable keyed rows
//!
//! `oxirow` provides [`Row`], a value type pairing a string key with an ordered,
//! read-only sequence of [`Value`] fields. It features:
//! - A checked factory that copies caller data and rejects absent fields
//! - Structural equality and `Hash`, plus a JVM-compatible 32-bit `hash_code`
//! - `key: [a, b, c]` display formatting
//! - Key-only ordering through [`Row::compare_to`]
//!
//! Rows are immutable once built and can be shared freely between threads.

pub mod core;
pub mod logging;

// Re-export key types for easier use by library consumers
pub use crate::core::common::types::{DataType, Row, Value};
pub use crate::core::common::OxirowError;
pub use crate::core::Config;

/// Core result type for the library
pub type Result<T> = std::result::Result<T, OxirowError>;
