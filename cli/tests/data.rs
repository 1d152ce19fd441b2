//! # gzembed CLI Data Mode Integration Tests
//!
//! File: cli/tests/data.rs
//!
//! ## Overview
//!
//! Runs `gzembed data` and checks that the compressed asset lands in the
//! project's `data/` directory, wherever the project root comes from.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_data_defaults_to_library_root() {
    let root = library_with(b"<html></html>");

    gzembed_cmd()
        .current_dir(root.path())
        .arg("data")
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully compressed"));

    let out = root.path().join("data/index.html.gz");
    assert_eq!(gunzip(&fs::read(out).unwrap()), b"<html></html>");
    assert!(!root.path().join("include").exists());
}

#[test]
fn test_data_uses_project_dir_env() {
    let root = library_with(b"<html><body>settings</body></html>");
    let project = tempfile::tempdir().unwrap();

    gzembed_cmd()
        .current_dir(root.path())
        .env("PROJECT_DIR", project.path())
        .arg("data")
        .assert()
        .success();

    let out = project.path().join("data/index.html.gz");
    assert_eq!(
        gunzip(&fs::read(out).unwrap()),
        b"<html><body>settings</body></html>"
    );
    assert!(!root.path().join("data").exists());
}

#[test]
fn test_project_dir_flag_overrides_env() {
    let root = library_with(b"<html></html>");
    let from_env = tempfile::tempdir().unwrap();
    let from_flag = tempfile::tempdir().unwrap();

    gzembed_cmd()
        .env("PROJECT_DIR", from_env.path())
        .args(["data", "--root"])
        .arg(root.path())
        .arg("--project-dir")
        .arg(from_flag.path())
        .assert()
        .success();

    assert!(from_flag.path().join("data/index.html.gz").is_file());
    assert!(!from_env.path().join("data").exists());
}

#[test]
fn test_data_missing_source_creates_nothing() {
    let root = tempfile::tempdir().unwrap();
    let project = tempfile::tempdir().unwrap();

    gzembed_cmd()
        .current_dir(root.path())
        .arg("data")
        .arg("--project-dir")
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: ").and(predicate::str::contains(
            "not found in library src directory",
        )));

    assert!(!project.path().join("data").exists());
}
