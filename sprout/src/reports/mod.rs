//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod init;
mod list;
mod output;

use std::{fmt, path::PathBuf};

pub use check::CheckReport;
pub use generate::{GenerateReport, GenerationResult, PreviewEntry};
pub use init::InitReport;
pub use list::{ListEntry, ListReport};
pub use output::{Report, TerminalOutput};

/// Where a manifest was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestSource {
    /// A sprout.toml on disk.
    File(PathBuf),
    /// The built-in reference configuration.
    Builtin,
}

impl fmt::Display for ManifestSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Builtin => f.write_str("built-in defaults"),
        }
    }
}

#[cfg(test)]
pub(crate) use output::BufferOutput;
