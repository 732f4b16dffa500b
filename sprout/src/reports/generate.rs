//! Generate command report data structures.

use std::path::PathBuf;

use sprout_codegen::{FileOutcome, ScaffoldResult};

use super::{
    ManifestSource,
    output::{Output, Report},
};

/// Report data from a scaffolding run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Where the manifest came from.
    pub source: ManifestSource,
    /// Output directory files were (or would be) written to.
    pub output_dir: PathBuf,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of a scaffolding run.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(ScaffoldResult),
    /// Dry-run preview.
    Preview(Vec<PreviewEntry>),
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewEntry {
    /// File name relative to the output directory.
    pub path: String,
    /// Content that would be written.
    pub content: String,
    /// Whether something already exists at the path.
    pub exists: bool,
}

impl GenerateReport {
    /// Number of files that could not be written.
    pub fn failure_count(&self) -> usize {
        match &self.result {
            GenerationResult::Written(result) => result.failed().count(),
            GenerationResult::Preview(_) => 0,
        }
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(result) => self.render_written(out, result),
            GenerationResult::Preview(entries) => self.render_preview(out, entries),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, result: &ScaffoldResult) {
        for report in &result.files {
            let name = report.file.as_str();
            match &report.outcome {
                FileOutcome::Created => out.key_value("created", name),
                FileOutcome::AlreadyExists => out.key_value("already exists", name),
                FileOutcome::Failed(reason) => {
                    out.failure("failed", &format!("{} ({})", name, reason))
                }
            }
        }

        out.newline();

        let created = result.created().count();
        let existing = result.existing().count();
        let failed = result.failed().count();

        let mut summary = format!(
            "{}: {} created, {} already existed",
            self.output_dir.display(),
            created,
            existing
        );
        if failed > 0 {
            summary.push_str(&format!(", {} failed", failed));
        }
        out.preformatted(&summary);
    }

    fn render_preview(&self, out: &mut dyn Output, entries: &[PreviewEntry]) {
        let mut pending = 0;

        for entry in entries {
            if entry.exists {
                out.key_value("already exists", &entry.path);
                continue;
            }

            pending += 1;
            out.divider(&self.output_dir.join(&entry.path).display().to_string());
            if !entry.content.is_empty() {
                out.preformatted(entry.content.trim_end());
            }
        }

        out.divider("Summary");
        out.key_value("Config", &self.source.to_string());
        out.preformatted(&format!(
            "{} file{} would be created",
            pending,
            if pending == 1 { "" } else { "s" }
        ));
    }
}
