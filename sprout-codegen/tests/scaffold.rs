//! Integration tests for scaffolding runs against a real directory.
//!
//! Each test runs the scaffolder into a fresh temporary directory and checks
//! the resulting file set and contents.

use std::{collections::BTreeSet, fs, path::Path, str::FromStr};

use sprout_codegen::{FileOutcome, Scaffolder};
use sprout_core::FileName;
use sprout_manifest::{DEFAULT_FILES, Manifest};
use tempfile::TempDir;

fn dir_entries(dir: &Path) -> BTreeSet<String> {
    fs::read_dir(dir)
        .expect("Failed to read output dir")
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

fn snapshot(dir: &Path) -> Vec<(String, String)> {
    dir_entries(dir)
        .into_iter()
        .map(|name| {
            let content = fs::read_to_string(dir.join(&name)).unwrap();
            (name, content)
        })
        .collect()
}

#[test]
fn test_creates_exactly_one_file_per_entry() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("components");
    let manifest = Manifest::default();

    let result = Scaffolder::new(&manifest).generate(&output).unwrap();

    assert_eq!(result.files.len(), DEFAULT_FILES.len());
    assert_eq!(result.created().count(), DEFAULT_FILES.len());
    assert_eq!(result.failed().count(), 0);

    let expected: BTreeSet<String> = DEFAULT_FILES.iter().map(|s| s.to_string()).collect();
    assert_eq!(dir_entries(&output), expected);
}

#[test]
fn test_outcomes_follow_manifest_order() {
    let temp = TempDir::new().unwrap();
    let manifest = Manifest::default();

    let result = Scaffolder::new(&manifest).generate(temp.path()).unwrap();

    let order: Vec<&str> = result.files.iter().map(|r| r.file.as_str()).collect();
    assert_eq!(order, DEFAULT_FILES);
}

#[test]
fn test_second_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("components");
    let manifest = Manifest::default();
    let scaffolder = Scaffolder::new(&manifest);

    scaffolder.generate(&output).unwrap();
    let after_first = snapshot(&output);

    let second = scaffolder.generate(&output).unwrap();

    assert_eq!(second.created().count(), 0);
    assert_eq!(second.existing().count(), DEFAULT_FILES.len());
    assert!(
        second
            .files
            .iter()
            .all(|r| r.outcome == FileOutcome::AlreadyExists)
    );
    assert_eq!(snapshot(&output), after_first);
}

#[test]
fn test_existing_file_is_never_overwritten() {
    let temp = TempDir::new().unwrap();
    let output = temp.path();
    fs::write(output.join("navigation-menu.tsx"), "X").unwrap();
    fs::write(output.join("use-toast.ts"), "export const keep = true;\n").unwrap();

    let manifest = Manifest::default();
    let result = Scaffolder::new(&manifest).generate(output).unwrap();

    assert_eq!(
        fs::read_to_string(output.join("navigation-menu.tsx")).unwrap(),
        "X"
    );
    assert_eq!(
        fs::read_to_string(output.join("use-toast.ts")).unwrap(),
        "export const keep = true;\n"
    );

    let existing: Vec<&str> = result.existing().map(|f| f.as_str()).collect();
    assert_eq!(existing, vec!["navigation-menu.tsx", "use-toast.ts"]);
    assert_eq!(result.created().count(), DEFAULT_FILES.len() - 2);
}

#[test]
fn test_generated_contents() {
    let temp = TempDir::new().unwrap();
    let manifest = Manifest::default();
    Scaffolder::new(&manifest).generate(temp.path()).unwrap();

    let menu = fs::read_to_string(temp.path().join("navigation-menu.tsx")).unwrap();
    assert_eq!(
        menu,
        "import React from \"react\";\n\nexport const NavigationMenu = () => {\n    return <div>NavigationMenu</div>;\n};\n"
    );

    let toggle_group = fs::read_to_string(temp.path().join("toggle-group.tsx")).unwrap();
    assert!(toggle_group.contains("export const ToggleGroup = () => {"));

    let use_toast = fs::read_to_string(temp.path().join("use-toast.ts")).unwrap();
    assert_eq!(use_toast, "");
}

#[test]
fn test_component_name_appears_exactly_twice() {
    let manifest = Manifest::default();

    for file in Scaffolder::new(&manifest).preview() {
        let name = FileName::new(file.path.clone()).unwrap();
        if file.path.ends_with(".tsx") {
            let display = name.display_name();
            assert_eq!(
                file.content.matches(display.as_str()).count(),
                2,
                "{} should mention {} twice",
                file.path,
                display
            );
        } else {
            assert!(file.content.is_empty(), "{} should be empty", file.path);
        }
    }
}

#[test]
fn test_creates_nested_output_directory() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("src").join("components").join("ui");
    let manifest = Manifest::from_str(
        r#"
        [scaffold]
        files = ["card.tsx"]
        "#,
    )
    .unwrap();

    Scaffolder::new(&manifest).generate(&output).unwrap();

    assert!(output.join("card.tsx").is_file());
}

#[test]
fn test_output_directory_blocked_by_file_is_fatal() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("components");
    fs::write(&output, "not a directory").unwrap();

    let manifest = Manifest::default();
    let err = Scaffolder::new(&manifest).generate(&output).unwrap_err();

    assert!(format!("{:#}", err).contains("failed to create output directory"));
}

#[test]
fn test_empty_manifest_creates_only_directory() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("components");
    let manifest = Manifest::new(&output, Vec::new());

    let result = Scaffolder::new(&manifest).generate(&output).unwrap();

    assert!(result.files.is_empty());
    assert!(output.is_dir());
    assert!(dir_entries(&output).is_empty());
}

#[test]
fn test_failed_write_does_not_stop_the_run() {
    let temp = TempDir::new().unwrap();
    // Longer than any common filesystem's name limit
    let too_long = format!("{}.tsx", "a".repeat(300));
    let manifest = Manifest::new(
        temp.path(),
        vec![
            FileName::new("card.tsx").unwrap(),
            FileName::new(too_long.clone()).unwrap(),
            FileName::new("sheet.tsx").unwrap(),
        ],
    );

    let result = Scaffolder::new(&manifest).generate(temp.path()).unwrap();

    let outcomes: Vec<&FileOutcome> = result.files.iter().map(|r| &r.outcome).collect();
    assert_eq!(outcomes[0], &FileOutcome::Created);
    assert!(matches!(outcomes[1], FileOutcome::Failed(msg) if msg.contains("failed to create")));
    assert_eq!(outcomes[2], &FileOutcome::Created);

    let failed: Vec<&str> = result.failed().map(|(f, _)| f.as_str()).collect();
    assert_eq!(failed, vec![too_long.as_str()]);
    assert!(temp.path().join("card.tsx").is_file());
    assert!(temp.path().join("sheet.tsx").is_file());
}
