//! Core utilities and types for the sprout scaffolder.
//!
//! This crate provides the file naming model and the write policy shared
//! by the manifest, code generation and CLI crates.

mod file;
mod name;
mod utils;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// Naming model
pub use name::{ComponentName, FileKind, FileName, InvalidFileName};
// String utilities
pub use utils::to_pascal_case;
