//! Shared infrastructure utilities for lapwatch.
//!
//! - **`durable`**: crash-safe file replacement (temp file + rename)

pub mod durable;

pub use durable::{replace_file, restore_backup};
