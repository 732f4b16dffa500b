//! List command report data structures.

use std::path::PathBuf;

use sprout_core::FileKind;

use super::{
    ManifestSource,
    output::{Output, Report},
};

/// Report data listing configured files.
#[derive(Debug)]
pub struct ListReport {
    /// Where the manifest came from.
    pub source: ManifestSource,
    /// Configured output directory.
    pub output_dir: PathBuf,
    /// Files in manifest order.
    pub entries: Vec<ListEntry>,
}

/// A configured file and what it scaffolds to.
#[derive(Debug)]
pub struct ListEntry {
    pub file: String,
    pub kind: FileKind,
    /// Exported component name (components only).
    pub component: Option<String>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Config", &self.source.to_string());
        out.key_value("Output", &self.output_dir.display().to_string());
        out.newline();

        if self.entries.is_empty() {
            out.preformatted("No files configured");
            return;
        }

        out.section(&format!("Files ({})", self.entries.len()));

        let width = self
            .entries
            .iter()
            .map(|e| e.file.chars().count())
            .max()
            .unwrap_or(0);

        for entry in &self.entries {
            let target = entry.component.as_deref().unwrap_or("(empty)");
            out.list_item(&format!(
                "{:<width$}  {:<9}  {}",
                entry.file,
                entry.kind.label(),
                target,
                width = width
            ));
        }
    }
}
