//! Core operations.
//!
//! This module contains the business logic for sprout commands,
//! separated from CLI argument parsing and output rendering.

use std::path::Path;

pub mod check;
pub mod generate;
pub mod init;
pub mod list;

pub use check::check;
pub use generate::{GenerateOptions, generate};
pub use init::{InitOptions, init};
pub use list::list;

/// Whether anything occupies `path`, so a stub write there would be skipped.
///
/// Unlike [`Path::exists`], a dangling symlink counts as occupied.
pub(crate) fn is_occupied(path: &Path) -> bool {
    path.symlink_metadata().is_ok()
}
