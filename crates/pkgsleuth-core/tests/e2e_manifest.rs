/// End-to-end tests for the manifest `clean` pipeline on a real temporary
/// project directory.
use pkgsleuth_core::config::ManifestPaths;
use pkgsleuth_core::manifest::{
    clean_manifest, load_manifest, write_manifest, ManifestDocument, DEV_DEPENDENCIES_KEY,
};
use pkgsleuth_core::ManifestError;
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn project_with_manifest(value: &Value) -> (TempDir, ManifestPaths) {
    let tmp = TempDir::new().unwrap();
    let paths = ManifestPaths::for_project(tmp.path());
    fs::write(&paths.input, serde_json::to_string(value).unwrap()).unwrap();
    (tmp, paths)
}

fn read_json(path: &std::path::Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[test]
fn clean_removes_dev_dependencies_and_creates_dist() {
    let (_tmp, paths) = project_with_manifest(&json!({
        "name": "x",
        "dependencies": {"express": "^4.18.0"},
        "devDependencies": {"jest": "^29.0.0"}
    }));

    let report = clean_manifest(&paths, false).unwrap();
    assert!(report.removed_dev_dependencies);
    assert_eq!(report.output, paths.output);
    assert_eq!(
        read_json(&paths.output),
        json!({"name": "x", "dependencies": {"express": "^4.18.0"}})
    );
}

#[test]
fn clean_with_keep_dev_copies_document_unchanged() {
    let original = json!({"name": "x", "devDependencies": {"a": "1"}});
    let (_tmp, paths) = project_with_manifest(&original);

    let report = clean_manifest(&paths, true).unwrap();
    assert!(!report.removed_dev_dependencies);
    assert_eq!(read_json(&paths.output), original);
}

#[test]
fn clean_output_is_indented_with_two_spaces() {
    let (_tmp, paths) = project_with_manifest(&json!({"name": "x", "version": "1.0.0"}));
    clean_manifest(&paths, false).unwrap();

    let text = fs::read_to_string(&paths.output).unwrap();
    assert_eq!(text, "{\n  \"name\": \"x\",\n  \"version\": \"1.0.0\"\n}");
}

/// Integers beyond the 64-bit range pass through digit for digit.
#[test]
fn clean_keeps_big_integers_exact() {
    let tmp = TempDir::new().unwrap();
    let paths = ManifestPaths::for_project(tmp.path());
    fs::write(
        &paths.input,
        r#"{"name":"x","build":123456789012345678901234567890,"ver":18446744073709551616}"#,
    )
    .unwrap();

    clean_manifest(&paths, false).unwrap();

    let text = fs::read_to_string(&paths.output).unwrap();
    assert!(text.contains("\"build\": 123456789012345678901234567890"), "{text}");
    assert!(text.contains("\"ver\": 18446744073709551616"), "{text}");
}

#[test]
fn write_then_load_round_trips() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("package.json");
    let doc: ManifestDocument = serde_json::from_value(json!({
        "version": "2.1.0",
        "name": "round-trip",
        "files": ["dist", "README.md"],
        "private": true,
        "engines": {"node": ">=18"},
        "nothing": null,
        "count": 3.5
    }))
    .unwrap();

    write_manifest(&doc, &path).unwrap();
    assert_eq!(load_manifest(&path).unwrap(), doc);
}

#[test]
fn missing_input_is_reported_and_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let paths = ManifestPaths::for_project(tmp.path());

    let err = clean_manifest(&paths, false).unwrap_err();
    assert!(matches!(err, ManifestError::MissingFile(_)));
    assert!(!paths.output.exists());
}

#[test]
fn invalid_input_is_a_parse_failure_and_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let paths = ManifestPaths::for_project(tmp.path());
    fs::write(&paths.input, "{ \"name\": \"x\", }").unwrap();

    let err = clean_manifest(&paths, false).unwrap_err();
    assert!(matches!(err, ManifestError::Parse { .. }));
    assert!(!paths.output.exists());
    assert!(!tmp.path().join("dist").exists());
}

#[test]
fn writer_does_not_create_parent_directories() {
    let tmp = TempDir::new().unwrap();
    let doc = ManifestDocument::default();
    let err = write_manifest(&doc, &tmp.path().join("missing").join("package.json")).unwrap_err();
    assert!(matches!(err, ManifestError::Write { .. }));
}

#[test]
fn existing_dist_directory_is_reused() {
    let (tmp, paths) = project_with_manifest(&json!({"name": "x"}));
    fs::create_dir_all(tmp.path().join("dist")).unwrap();

    clean_manifest(&paths, false).unwrap();
    assert!(!read_json(&paths.output)
        .as_object()
        .unwrap()
        .contains_key(DEV_DEPENDENCIES_KEY));
}
