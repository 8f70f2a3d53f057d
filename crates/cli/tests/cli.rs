//! Integration tests for the `repoconfig` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tempfile::TempDir;

const INTAKE: &str = r#"
[report_config]
title = "Weekly report"

[[repo_config]]
location = "https://github.com/foo/bar.git"

[[repo_config.branches]]
name = "master"
file_formats = ["Java"]
ignore_glob_list = ["docs/**"]
ignore_commit_list = ["abc123"]
ignore_author_list = ["bot"]

[[group_config]]
location = "https://github.com/foo/bar.git"
"#;

fn repoconfig(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("repoconfig").unwrap();
    cmd.current_dir(dir).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn write_intake(dir: &TempDir, content: &str) {
    fs::write(dir.path().join("intake.toml"), content).unwrap();
}

fn zip_names(path: &Path) -> Vec<String> {
    let bytes = fs::read(path).unwrap();
    let archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    archive.file_names().map(str::to_string).collect()
}

#[test]
fn test_init_writes_intake_document() {
    let dir = TempDir::new().unwrap();

    repoconfig(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("repoconfig.toml"));

    let content = fs::read_to_string(dir.path().join("repoconfig.toml")).unwrap();
    assert!(content.contains("[report_config]"));
}

#[test]
fn test_init_refuses_to_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("repoconfig.yaml"), "# mine").unwrap();

    repoconfig(dir.path())
        .args(["init", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
    assert_eq!(
        fs::read_to_string(dir.path().join("repoconfig.yaml")).unwrap(),
        "# mine"
    );

    repoconfig(dir.path())
        .args(["init", "--format", "yaml", "--force", "--minimal"])
        .assert()
        .success();
    assert!(fs::read_to_string(dir.path().join("repoconfig.yaml"))
        .unwrap()
        .contains("repo_config:"));
}

#[test]
fn test_init_then_create_builds_every_file() {
    let dir = TempDir::new().unwrap();
    repoconfig(dir.path()).arg("init").assert().success();

    repoconfig(dir.path())
        .args(["create", "repoconfig.toml", "--out-dir", "out", "--archive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json (created)"));

    let out = dir.path().join("out");
    for name in [
        "repo-config.csv",
        "author-config.csv",
        "group-config.csv",
        "report-config.json",
        "config.json",
    ] {
        assert!(out.join(name).is_file(), "{name} should be written");
    }
    assert_eq!(zip_names(&out.join("configs.zip")).len(), 5);
    assert!(dir.path().join("temp").join("config.json").is_file());
}

#[test]
fn test_create_fails_on_invalid_section_but_writes_the_rest() {
    let dir = TempDir::new().unwrap();
    write_intake(&dir, INTAKE);

    repoconfig(dir.path())
        .args(["create", "intake.toml", "--no-scratch"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("repo-config.csv (created)"))
        .stderr(predicate::str::contains("zero valid entries"));

    assert!(dir.path().join("repo-config.csv").is_file());
    assert!(dir.path().join("report-config.json").is_file());
    assert!(!dir.path().join("group-config.csv").exists());
    assert!(!dir.path().join("temp").exists());
}

#[test]
fn test_create_only_requested_kinds() {
    let dir = TempDir::new().unwrap();
    write_intake(&dir, INTAKE);

    repoconfig(dir.path())
        .args([
            "create",
            "intake.toml",
            "--no-scratch",
            "--kind",
            "report-config",
            "--archive",
            "bundle.zip",
        ])
        .assert()
        .success();

    assert!(dir.path().join("report-config.json").is_file());
    assert!(!dir.path().join("repo-config.csv").exists());
    assert_eq!(
        zip_names(&dir.path().join("bundle.zip")),
        vec!["report-config.json"]
    );
}

#[test]
fn test_create_preview_prints_records_without_writing() {
    let dir = TempDir::new().unwrap();
    write_intake(&dir, INTAKE);

    repoconfig(dir.path())
        .args(["create", "intake.toml", "--preview", "--kind", "repo-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"repo-config.csv\""))
        .stdout(predicate::str::contains("\"java\""));

    assert!(!dir.path().join("repo-config.csv").exists());
}

#[test]
fn test_create_help_warns_that_scratch_dir_is_cleared() {
    let dir = TempDir::new().unwrap();

    repoconfig(dir.path())
        .args(["create", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--scratch-dir"))
        .stdout(predicate::str::contains("is deleted when `create` starts"));
}

#[test]
fn test_create_reports_unreadable_intake() {
    let dir = TempDir::new().unwrap();
    write_intake(&dir, "report_config = [oops");

    repoconfig(dir.path())
        .args(["create", "intake.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse TOML"));
}

#[test]
fn test_package_bundles_files_by_name() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("nested").join("config.json"), "{}").unwrap();
    fs::write(dir.path().join("report-config.json"), "{}").unwrap();

    repoconfig(dir.path())
        .args(["package", "nested/config.json", "report-config.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Packed 2 file(s)"));

    assert_eq!(
        zip_names(&dir.path().join("configs.zip")),
        vec!["config.json", "report-config.json"]
    );
}

#[test]
fn test_package_without_files_warns() {
    let dir = TempDir::new().unwrap();

    repoconfig(dir.path())
        .args(["package", "--output", "empty.zip"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No config files created!"));

    assert!(zip_names(&dir.path().join("empty.zip")).is_empty());
}

#[test]
fn test_package_rejects_duplicate_names() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("a")).unwrap();
    fs::write(dir.path().join("a").join("config.json"), "{}").unwrap();
    fs::write(dir.path().join("config.json"), "{}").unwrap();

    repoconfig(dir.path())
        .args(["package", "a/config.json", "config.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config.json"));

    assert!(!dir.path().join("configs.zip").exists());
}
