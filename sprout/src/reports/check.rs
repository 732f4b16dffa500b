//! Check command report data structures.

use std::path::PathBuf;

use super::{
    ManifestSource,
    output::{Output, Report},
};

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Where the manifest came from.
    pub source: ManifestSource,
    /// Configured output directory.
    pub output_dir: PathBuf,
    /// Number of `.tsx` entries.
    pub components: usize,
    /// Number of `.ts` entries.
    pub modules: usize,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.infos.is_empty() {
            out.newline();
        }

        out.preformatted(&format!("✓ {} is valid", self.source));
        out.newline();
        out.key_value("  Output", &self.output_dir.display().to_string());
        out.key_value(
            "  Files",
            &format!(
                "{} ({} component{}, {} module{})",
                self.components + self.modules,
                self.components,
                if self.components == 1 { "" } else { "s" },
                self.modules,
                if self.modules == 1 { "" } else { "s" }
            ),
        );
    }
}
