//! TypeScript/React stub generation for the sprout scaffolder.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! use sprout_codegen::Scaffolder;
//! use sprout_manifest::Manifest;
//!
//! let manifest = Manifest::default();
//! let scaffolder = Scaffolder::new(&manifest);
//!
//! // Preview files without writing
//! let files = scaffolder.preview();
//!
//! // Create missing files on disk
//! let result = scaffolder.generate(Path::new("components"))?;
//! # Ok::<(), eyre::Report>(())
//! ```
//!
//! # Generated Output
//!
//! - `*.tsx` - a function component that renders its own name
//! - `*.ts` - an empty module
//!
//! Existing files are never overwritten.

mod code_file;
mod generator;

pub mod ast;
pub mod builder;
pub mod files;

pub use code_file::CodeFile;
pub use generator::{FileOutcome, FileReport, PreviewFile, ScaffoldResult, Scaffolder};
