//! Generate operation - scaffold missing files from a manifest.

use std::path::Path;

use eyre::{Context, Result};
use sprout_codegen::Scaffolder;
use sprout_manifest::Manifest;

use super::is_occupied;
use crate::reports::{GenerateReport, GenerationResult, ManifestSource, PreviewEntry};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Output directory for scaffolded files.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Fails only when the output directory cannot be created; per-file write
/// failures are carried in the report.
pub fn generate(
    manifest: &Manifest,
    source: ManifestSource,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let scaffolder = Scaffolder::new(manifest);

    let result = if opts.dry_run {
        let entries = scaffolder
            .preview()
            .into_iter()
            .map(|f| PreviewEntry {
                exists: is_occupied(&opts.output_dir.join(&f.path)),
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(entries)
    } else {
        let result = scaffolder
            .generate(opts.output_dir)
            .wrap_err("Failed to scaffold files")?;
        GenerationResult::Written(result)
    };

    Ok(GenerateReport {
        source,
        output_dir: opts.output_dir.to_path_buf(),
        result,
    })
}
