//! Check operation - manifest validation.

use std::collections::HashMap;

use sprout_core::{ComponentName, FileKind};
use sprout_manifest::Manifest;

use super::is_occupied;
use crate::reports::{CheckReport, ManifestSource};

/// Execute the check operation.
///
/// Parsing already rejected structurally invalid manifests, so everything
/// found here is advisory.
pub fn check(manifest: &Manifest, source: ManifestSource) -> CheckReport {
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    let mut components = 0;
    let mut modules = 0;
    let mut seen: HashMap<ComponentName, &str> = HashMap::new();

    for file in &manifest.files {
        match file.kind() {
            FileKind::Module => modules += 1,
            FileKind::Component => {
                components += 1;
                let name = file.display_name();

                if !is_identifier(name.as_str()) {
                    warnings.push(format!(
                        "'{}' produces component name '{}', which is not a valid identifier",
                        file, name
                    ));
                }

                if let Some(first) = seen.get(&name) {
                    warnings.push(format!(
                        "'{}' and '{}' both declare component '{}'",
                        first, file, name
                    ));
                } else {
                    seen.insert(name, file.as_str());
                }
            }
        }
    }

    if manifest.output.is_dir() {
        let present = manifest
            .files
            .iter()
            .filter(|file| is_occupied(&manifest.output.join(file.as_str())))
            .count();
        if present > 0 {
            infos.push(format!(
                "{} of {} files already exist in {}",
                present,
                manifest.files.len(),
                manifest.output.display()
            ));
        }
    } else {
        infos.push(format!(
            "output directory {} does not exist yet",
            manifest.output.display()
        ));
    }

    CheckReport {
        source,
        output_dir: manifest.output.clone(),
        components,
        modules,
        warnings,
        infos,
    }
}

/// Whether `name` can be used as a JavaScript binding.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}
