//! Manifest types and parsing for sprout.toml files.

mod defaults;
mod parse;
mod serialize;

use std::path::PathBuf;

pub use defaults::{DEFAULT_FILES, DEFAULT_OUTPUT, MANIFEST_FILE};
use sprout_core::FileName;

/// Scaffolding configuration: where to write, and which files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// Output directory, relative to the working directory unless absolute
    pub output: PathBuf,

    /// Files to scaffold, in the order they are processed
    pub files: Vec<FileName>,
}

impl Manifest {
    /// Create a manifest from an output directory and file list.
    pub fn new(output: impl Into<PathBuf>, files: Vec<FileName>) -> Self {
        Self {
            output: output.into(),
            files,
        }
    }

    /// Replace the output directory.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }
}

impl Default for Manifest {
    /// The reference configuration: [`DEFAULT_OUTPUT`] and [`DEFAULT_FILES`].
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            files: defaults::default_files(),
        }
    }
}
