//! Integration tests for init and preview commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{seoinject_cmd, write_site};

#[test]
fn test_init_creates_config() {
    let temp = TempDir::new().unwrap();

    seoinject_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    let content = fs::read_to_string(temp.path().join("seoinject.toml")).unwrap();
    assert!(content.contains("templates_dir = \"templates\""));
    assert!(content.contains("extension = \"html\""));
    assert!(content.contains("anchor = \"head-close\""));
    assert!(content.contains("[defaults]"));
    assert!(content.contains("\"index.html\""));
}

#[test]
fn test_init_creates_missing_directory() {
    let temp = TempDir::new().unwrap();
    let site = temp.path().join("new-site");

    seoinject_cmd().arg("init").arg(&site).assert().success();

    assert!(site.join("seoinject.toml").is_file());
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();

    seoinject_cmd().arg("init").arg(temp.path()).assert().success();

    seoinject_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Already initialized"));
}

#[test]
fn test_init_then_apply() {
    let temp = TempDir::new().unwrap();

    seoinject_cmd().arg("init").arg(temp.path()).assert().success();
    fs::create_dir_all(temp.path().join("templates")).unwrap();
    fs::write(
        temp.path().join("templates/index.html"),
        "<html><head><title>Home</title></head></html>",
    )
    .unwrap();

    seoinject_cmd()
        .current_dir(temp.path())
        .arg("apply")
        .assert()
        .success()
        .stdout(predicate::str::contains("index.html: updated"));

    let content = fs::read_to_string(temp.path().join("templates/index.html")).unwrap();
    assert!(content.contains("<meta property=\"og:title\" content=\"Home - My Site\">"));
    assert!(content.contains("<link rel=\"canonical\" href=\"https://example.com/\">"));
}

#[test]
fn test_preview_prints_block() {
    let temp = TempDir::new().unwrap();
    write_site(
        temp.path(),
        "[pages.\"login.html\"]\ntitle = \"Login - X\"\ncanonical = \"https://x.com/login\"\n",
    );

    seoinject_cmd()
        .current_dir(temp.path())
        .arg("preview")
        .arg("login.html")
        .assert()
        .success()
        .stdout(predicate::str::contains("<!-- seoinject:begin -->"))
        .stdout(predicate::str::contains(
            "<meta property=\"og:title\" content=\"Login - X\">",
        ))
        .stdout(predicate::str::contains("<!-- seoinject:end -->"));
}

#[test]
fn test_preview_output_is_deterministic() {
    let temp = TempDir::new().unwrap();
    write_site(temp.path(), "[defaults]\nsite_name = \"X\"\n");

    let first = seoinject_cmd()
        .current_dir(temp.path())
        .arg("preview")
        .arg("about.html")
        .output()
        .unwrap();
    let second = seoinject_cmd()
        .current_dir(temp.path())
        .arg("preview")
        .arg("about.html")
        .output()
        .unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_preview_unknown_page_with_skip_policy() {
    let temp = TempDir::new().unwrap();
    write_site(temp.path(), "unmapped = \"skip\"\n");

    seoinject_cmd()
        .current_dir(temp.path())
        .arg("preview")
        .arg("about.html")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("[pages.\"about.html\"]"));
}

#[test]
fn test_invalid_url_in_config_fails() {
    let temp = TempDir::new().unwrap();
    write_site(temp.path(), "[defaults]\nbase_url = \"example.com\"\n");

    seoinject_cmd()
        .current_dir(temp.path())
        .arg("preview")
        .arg("index.html")
        .assert()
        .failure()
        .stderr(predicate::str::contains("defaults.base_url"));
}
