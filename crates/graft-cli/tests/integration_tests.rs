//! Integration tests for graft-cli.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn graft() -> Command {
    Command::cargo_bin("graft").unwrap()
}

fn write(root: &Path, rel: &str, content: &str) {
    let full = root.join(rel);
    fs::create_dir_all(full.parent().unwrap()).unwrap();
    fs::write(full, content).unwrap();
}

/// Catalog with one template `spring-web`, plus an empty-ish target project.
fn fixture() -> (TempDir, TempDir) {
    let catalog = TempDir::new().unwrap();
    let tpl = catalog.path().join("templates/spring-web");
    fs::create_dir_all(&tpl).unwrap();
    write(
        &tpl,
        "graft.json",
        r#"{ "package": "com.acme.foo", "language": "java" }"#,
    );
    write(
        &tpl,
        "src/main/java/com/acme/foo/WebConfig.java",
        "package com.acme.foo;\n\npublic class WebConfig {}\n",
    );

    let target = TempDir::new().unwrap();
    write(
        target.path(),
        "graft.json",
        r#"{ "package": "com.acme.bar", "language": "java" }"#,
    );

    (catalog, target)
}

// ── help / version ────────────────────────────────────────────────────────────

#[test]
fn help_flag_shows_usage() {
    graft()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Merge reusable templates"))
        .stdout(predicate::str::contains("merge"));
}

#[test]
fn version_flag_matches_cargo() {
    graft()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn merge_help_documents_flags() {
    graft()
        .args(["merge", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--target"))
        .stdout(predicate::str::contains("--catalog"))
        .stdout(predicate::str::contains("--multi-module"));
}

// ── merge ─────────────────────────────────────────────────────────────────────

#[test]
fn merge_copies_template_into_target() {
    let (catalog, target) = fixture();

    graft()
        .args(["merge", "spring-web"])
        .arg("--target")
        .arg(target.path())
        .arg("--catalog")
        .arg(catalog.path())
        .assert()
        .success();

    let rewritten = target
        .path()
        .join("src/main/java/com/acme/bar/WebConfig.java");
    assert!(rewritten.is_file());
    let content = fs::read_to_string(rewritten).unwrap();
    assert!(content.contains("package com.acme.bar;"));
}

#[test]
fn merge_without_catalog_is_a_configuration_error() {
    let (_catalog, target) = fixture();

    graft()
        .env_remove("GRAFT_CATALOG")
        .args(["merge", "spring-web"])
        .arg("--target")
        .arg(target.path())
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("catalog"));
}

#[test]
fn merge_unknown_template_exits_not_found() {
    let (catalog, target) = fixture();

    graft()
        .args(["merge", "no-such-template"])
        .arg("--target")
        .arg(target.path())
        .arg("--catalog")
        .arg(catalog.path())
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Template not found"));
}

#[test]
fn merge_missing_target_is_a_user_error() {
    let (catalog, _target) = fixture();

    graft()
        .args(["merge", "spring-web", "--target", "/definitely/not/here"])
        .arg("--catalog")
        .arg(catalog.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Target directory not found"));
}

#[test]
fn merge_requires_a_template_argument() {
    graft().arg("merge").assert().failure().code(2);
}

#[test]
fn quiet_merge_prints_nothing_on_stdout() {
    let (catalog, target) = fixture();

    graft()
        .args(["-q", "merge", "spring-web"])
        .arg("--target")
        .arg(target.path())
        .arg("--catalog")
        .arg(catalog.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn catalog_can_come_from_the_environment() {
    let (catalog, target) = fixture();

    graft()
        .env("GRAFT_CATALOG", catalog.path())
        .args(["merge", "spring-web"])
        .arg("--target")
        .arg(target.path())
        .assert()
        .success();
}

// ── completions ───────────────────────────────────────────────────────────────

#[test]
fn shell_completions_generate() {
    graft()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("graft"));
}
