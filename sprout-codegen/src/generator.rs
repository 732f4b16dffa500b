//! Scaffolding run: ensure the output directory, then create each missing stub.

use std::path::Path;

use eyre::{Result, WrapErr};
use sprout_core::{FileName, GeneratedFile, WriteResult};
use sprout_manifest::Manifest;

use crate::files::Stub;

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// What happened to a single configured file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file was missing and has been written.
    Created,
    /// Something already existed at the path; nothing was written.
    AlreadyExists,
    /// The write failed; the message carries the error chain.
    Failed(String),
}

/// Outcome for one file, in manifest order.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub file: FileName,
    pub outcome: FileOutcome,
}

/// Result of a scaffolding run.
#[derive(Debug)]
pub struct ScaffoldResult {
    /// One entry per configured file, in manifest order
    pub files: Vec<FileReport>,
}

impl ScaffoldResult {
    /// Files created by this run.
    pub fn created(&self) -> impl Iterator<Item = &FileName> {
        self.with_outcome(|o| matches!(o, FileOutcome::Created))
    }

    /// Files that were left untouched because they already existed.
    pub fn existing(&self) -> impl Iterator<Item = &FileName> {
        self.with_outcome(|o| matches!(o, FileOutcome::AlreadyExists))
    }

    /// Files that could not be written, with the error message.
    pub fn failed(&self) -> impl Iterator<Item = (&FileName, &str)> {
        self.files.iter().filter_map(|r| match &r.outcome {
            FileOutcome::Failed(msg) => Some((&r.file, msg.as_str())),
            _ => None,
        })
    }

    fn with_outcome(&self, pred: impl Fn(&FileOutcome) -> bool) -> impl Iterator<Item = &FileName> {
        self.files
            .iter()
            .filter(move |r| pred(&r.outcome))
            .map(|r| &r.file)
    }
}

/// Creates placeholder files for every entry of a manifest.
pub struct Scaffolder<'a> {
    manifest: &'a Manifest,
}

impl<'a> Scaffolder<'a> {
    pub fn new(manifest: &'a Manifest) -> Self {
        Self { manifest }
    }

    /// Stub generators for every configured file, in manifest order.
    pub fn stubs(&self) -> impl Iterator<Item = Stub> + 'a {
        self.manifest.files.iter().cloned().map(Stub::for_file)
    }

    /// Preview generated files without writing to disk.
    pub fn preview(&self) -> Vec<PreviewFile> {
        self.stubs()
            .map(|stub| PreviewFile {
                path: stub.file().to_string(),
                content: stub.render(),
            })
            .collect()
    }

    /// Create the output directory and any missing parents.
    ///
    /// An existing directory is not an error.
    pub fn ensure_output_dir(output_dir: &Path) -> Result<()> {
        std::fs::create_dir_all(output_dir).wrap_err_with(|| {
            format!(
                "failed to create output directory '{}'",
                output_dir.display()
            )
        })
    }

    /// Generate all missing files into the specified output directory.
    ///
    /// Fails only if the output directory cannot be created. A failed file
    /// write is recorded in the result and the remaining files are still
    /// processed.
    pub fn generate(&self, output_dir: &Path) -> Result<ScaffoldResult> {
        Self::ensure_output_dir(output_dir)?;

        let files = self
            .stubs()
            .map(|stub| {
                let outcome = match stub.write(output_dir) {
                    Ok(WriteResult::Written) => FileOutcome::Created,
                    Ok(WriteResult::Skipped) => FileOutcome::AlreadyExists,
                    Err(e) => FileOutcome::Failed(format!("{:#}", e)),
                };
                FileReport {
                    file: stub.file().clone(),
                    outcome,
                }
            })
            .collect();

        Ok(ScaffoldResult { files })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(name: &str, outcome: FileOutcome) -> FileReport {
        FileReport {
            file: FileName::new(name).unwrap(),
            outcome,
        }
    }

    #[test]
    fn test_result_partitions() {
        let result = ScaffoldResult {
            files: vec![
                report("a.tsx", FileOutcome::Created),
                report("b.tsx", FileOutcome::AlreadyExists),
                report("c.ts", FileOutcome::Failed("disk full".to_string())),
                report("d.tsx", FileOutcome::Created),
            ],
        };

        let created: Vec<_> = result.created().map(|f| f.as_str()).collect();
        let existing: Vec<_> = result.existing().map(|f| f.as_str()).collect();
        let failed: Vec<_> = result.failed().map(|(f, m)| (f.as_str(), m)).collect();

        assert_eq!(created, vec!["a.tsx", "d.tsx"]);
        assert_eq!(existing, vec!["b.tsx"]);
        assert_eq!(failed, vec![("c.ts", "disk full")]);
    }

    #[test]
    fn test_preview_follows_manifest_order() {
        let manifest = Manifest::new(
            "ui",
            vec![
                FileName::new("zeta.tsx").unwrap(),
                FileName::new("alpha.ts").unwrap(),
            ],
        );
        let files = Scaffolder::new(&manifest).preview();

        assert_eq!(files.len(), 2);
        assert_eq!(files[0].path, "zeta.tsx");
        assert!(files[0].content.contains("export const Zeta"));
        assert_eq!(files[1].path, "alpha.ts");
        assert_eq!(files[1].content, "");
    }
}
