//! Manifest parsing from files and strings.

use std::{collections::HashMap, path::Path, str::FromStr};

use miette::SourceSpan;
use serde::Deserialize;
use sprout_core::FileName;
use toml::Spanned;

use super::{MANIFEST_FILE, Manifest};
use crate::{Error, Result, error::SourceContext};

/// On-disk shape of sprout.toml, with spans kept for diagnostics.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawManifest {
    #[serde(default)]
    scaffold: RawScaffold,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawScaffold {
    output: Option<Spanned<String>>,
    files: Option<Vec<Spanned<String>>>,
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, MANIFEST_FILE)
    }
}

impl Manifest {
    /// Parse a sprout.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }
}

/// Parse a manifest from content with the given filename for error reporting.
///
/// Missing keys fall back to the reference configuration.
fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let raw: RawManifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    build_manifest(raw.scaffold, &source_ctx)
}

fn build_manifest(raw: RawScaffold, ctx: &SourceContext) -> Result<Manifest> {
    let mut manifest = Manifest::default();

    if let Some(output) = raw.output {
        if output.get_ref().trim().is_empty() {
            return Err(ctx.validation_error(
                "output directory must not be empty",
                Some(span_of(&output)),
            ));
        }
        manifest.output = output.into_inner().into();
    }

    if let Some(files) = raw.files {
        manifest.files = validate_files(files, ctx)?;
    }

    Ok(manifest)
}

/// Validate each entry and reject duplicates, keeping list order.
fn validate_files(entries: Vec<Spanned<String>>, ctx: &SourceContext) -> Result<Vec<FileName>> {
    let mut seen: HashMap<String, SourceSpan> = HashMap::new();
    let mut files = Vec::with_capacity(entries.len());

    for entry in entries {
        let span = span_of(&entry);
        let name = entry.into_inner();

        if let Some(first) = seen.get(&name) {
            return Err(ctx.duplicate_file_error(name, *first, span));
        }

        let file = FileName::new(name.clone())
            .map_err(|e| ctx.invalid_file_name_error(&name, e.to_string(), Some(span)))?;

        seen.insert(name, span);
        files.push(file);
    }

    Ok(files)
}

fn span_of<T>(spanned: &Spanned<T>) -> SourceSpan {
    spanned.span().into()
}
