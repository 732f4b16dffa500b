//! List operation - describe configured files.

use sprout_core::FileKind;
use sprout_manifest::Manifest;

use crate::reports::{ListEntry, ListReport, ManifestSource};

/// Execute the list operation.
pub fn list(manifest: &Manifest, source: ManifestSource) -> ListReport {
    let entries = manifest
        .files
        .iter()
        .map(|file| ListEntry {
            file: file.to_string(),
            kind: file.kind(),
            component: (file.kind() == FileKind::Component)
                .then(|| file.display_name().to_string()),
        })
        .collect();

    ListReport {
        source,
        output_dir: manifest.output.clone(),
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_default_manifest() {
        let report = list(&Manifest::default(), ManifestSource::Builtin);

        assert_eq!(report.entries.len(), 27);
        let menu = report
            .entries
            .iter()
            .find(|e| e.file == "navigation-menu.tsx")
            .unwrap();
        assert_eq!(menu.component.as_deref(), Some("NavigationMenu"));

        let toast = report.entries.last().unwrap();
        assert_eq!(toast.file, "use-toast.ts");
        assert_eq!(toast.kind, FileKind::Module);
        assert_eq!(toast.component, None);
    }
}
