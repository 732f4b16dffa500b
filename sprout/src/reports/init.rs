//! Init command report data structures.

use std::path::PathBuf;

use sprout_core::WriteResult;

use super::output::{Output, Report};

/// Report data from writing a new manifest.
#[derive(Debug)]
pub struct InitReport {
    /// Path of the manifest.
    pub path: PathBuf,
    /// Whether the manifest was written or left alone.
    pub result: WriteResult,
    /// Number of files listed in the written manifest.
    pub file_count: usize,
}

impl Report for InitReport {
    fn render(&self, out: &mut dyn Output) {
        match self.result {
            WriteResult::Written => {
                out.key_value("created", &self.path.display().to_string());
                out.newline();
                out.preformatted(&format!("{} files configured", self.file_count));
                out.newline();
                out.section("Next steps");
                out.list_item("sprout list");
                out.list_item("sprout generate");
            }
            WriteResult::Skipped => {
                out.key_value("already exists", &self.path.display().to_string());
                out.warning("left unchanged; pass --force to overwrite");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::BufferOutput;

    #[test]
    fn test_render_skipped() {
        let report = InitReport {
            path: PathBuf::from("sprout.toml"),
            result: WriteResult::Skipped,
            file_count: 27,
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(out.stdout, vec!["already exists: sprout.toml"]);
        assert_eq!(out.stderr.len(), 1);
        assert!(out.stderr[0].contains("--force"));
    }

    #[test]
    fn test_render_written() {
        let report = InitReport {
            path: PathBuf::from("sprout.toml"),
            result: WriteResult::Written,
            file_count: 27,
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(out.stdout[0], "created: sprout.toml");
        assert!(out.stdout.contains(&"27 files configured".to_string()));
        assert!(out.stderr.is_empty());
    }
}
