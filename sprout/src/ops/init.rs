//! Init operation - write a sprout.toml with the reference configuration.

use std::path::Path;

use eyre::{Context, Result};
use sprout_core::{File, FileRules};
use sprout_manifest::Manifest;

use crate::reports::InitReport;

/// Options for the init operation.
pub struct InitOptions<'a> {
    /// Where to write the manifest.
    pub path: &'a Path,
    /// Overwrite an existing manifest.
    pub force: bool,
}

/// Execute the init operation.
pub fn init(manifest: &Manifest, opts: InitOptions) -> Result<InitReport> {
    let content = manifest
        .to_toml()
        .wrap_err("Failed to serialize manifest")?;

    let rules = if opts.force {
        FileRules::default()
    } else {
        FileRules::create_once()
    };

    let result = File::new(opts.path, content)
        .with_rules(rules)
        .write()
        .wrap_err("Failed to write manifest")?;

    Ok(InitReport {
        path: opts.path.to_path_buf(),
        result,
        file_count: manifest.files.len(),
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use sprout_core::WriteResult;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_init_writes_parseable_manifest() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sprout.toml");

        let report = init(
            &Manifest::default(),
            InitOptions {
                path: &path,
                force: false,
            },
        )
        .unwrap();

        assert_eq!(report.result, WriteResult::Written);
        assert_eq!(report.file_count, 27);
        assert_eq!(Manifest::from_file(&path).unwrap(), Manifest::default());
    }

    #[test]
    fn test_init_keeps_existing_manifest() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sprout.toml");
        fs::write(&path, "[scaffold]\nfiles = []\n").unwrap();

        let report = init(
            &Manifest::default(),
            InitOptions {
                path: &path,
                force: false,
            },
        )
        .unwrap();

        assert_eq!(report.result, WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "[scaffold]\nfiles = []\n");
    }

    #[test]
    fn test_init_force_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sprout.toml");
        fs::write(&path, "[scaffold]\nfiles = []\n").unwrap();

        let manifest = Manifest::default().with_output("src/ui");
        let report = init(
            &manifest,
            InitOptions {
                path: &path,
                force: true,
            },
        )
        .unwrap();

        assert_eq!(report.result, WriteResult::Written);
        assert_eq!(Manifest::from_file(&path).unwrap(), manifest);
    }
}
