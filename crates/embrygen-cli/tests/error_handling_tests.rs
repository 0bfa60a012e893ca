//! Exit codes and error messages.

use std::fs;

use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn embrygen(sandbox: &TempDir) -> Command {
    let mut cmd = cargo::cargo_bin_cmd!("embrygen");
    cmd.current_dir(sandbox.path())
        .env("HOME", sandbox.path())
        .env("XDG_CONFIG_HOME", sandbox.path().join(".config"))
        .env_remove("EMBRYGEN_TEMPLATES_DIR")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_unknown_subcommand_is_usage_error() {
    let sandbox = TempDir::new().unwrap();
    embrygen(&sandbox).arg("frobnicate").assert().code(2);
}

#[test]
fn test_unknown_flag_is_usage_error() {
    let sandbox = TempDir::new().unwrap();
    embrygen(&sandbox).arg("--lang").arg("go").assert().code(2);
}

#[test]
fn test_invalid_app_name_is_rejected_before_writing() {
    let sandbox = TempDir::new().unwrap();

    embrygen(&sandbox)
        .args(["--root-name", "demo", "--app-name", "a/b"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("app_name"));

    assert!(!sandbox.path().join("tests").exists());
}

#[test]
fn test_empty_module_is_rejected() {
    let sandbox = TempDir::new().unwrap();

    embrygen(&sandbox)
        .args(["--module", ""])
        .assert()
        .code(4);

    assert!(!sandbox.path().join("tests").exists());
}

#[test]
fn test_unresolved_marker_aborts_before_writing() {
    let sandbox = TempDir::new().unwrap();
    let pack = sandbox.path().join("pack");
    fs::create_dir_all(pack.join("files")).unwrap();
    fs::write(
        pack.join("template.toml"),
        "[template]\nid = \"broken\"\nversion = \"0.1.0\"\n\n[metadata]\nname = \"Test\"\n\n[[files]]\nsource = \"LICENSE\"\n",
    )
    .unwrap();
    fs::write(pack.join("files/LICENSE"), "Copyright {{YEAR}}\n").unwrap();

    embrygen(&sandbox)
        .args(["--root-name", "demo", "--templates-dir"])
        .arg(&pack)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("{{YEAR}}"));

    assert!(!sandbox.path().join("tests").exists());
}

#[test]
fn test_missing_template_pack_is_reported() {
    let sandbox = TempDir::new().unwrap();

    embrygen(&sandbox)
        .args(["--templates-dir", "no-such-pack"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Template source unavailable"));
}

#[test]
fn test_write_failure_exits_one() {
    let sandbox = TempDir::new().unwrap();
    // A regular file where the base directory should be.
    fs::write(sandbox.path().join("blocker"), "").unwrap();

    embrygen(&sandbox)
        .args(["--root-name", "demo", "--base-dir", "blocker"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Filesystem error"));
}

#[test]
fn test_missing_explicit_config_file() {
    let sandbox = TempDir::new().unwrap();

    embrygen(&sandbox)
        .args(["--config", "absent.toml", "config", "list"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn test_unknown_config_key() {
    let sandbox = TempDir::new().unwrap();

    embrygen(&sandbox)
        .args(["config", "get", "generation.colour"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown config key"));
}
