//! `sprout.toml` parsing and validation.
//!
//! A manifest names the output directory and the ordered list of files to
//! scaffold. When no manifest is given, [`Manifest::default`] supplies the
//! reference configuration.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result};
pub use manifest::{DEFAULT_FILES, DEFAULT_OUTPUT, MANIFEST_FILE, Manifest};
