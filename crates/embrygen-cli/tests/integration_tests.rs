//! Integration tests for the `embrygen` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;
use walkdir::WalkDir;

/// A command isolated from the host: cwd, HOME and config dir all point into
/// `sandbox`, and no inherited `EMBRYGEN_*` settings leak in.
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

fn demo_root(sandbox: &TempDir) -> PathBuf {
    sandbox.path().join("tests").join("demo")
}

fn demo_args() -> [&'static str; 8] {
    [
        "--root-name",
        "demo",
        "--module",
        "example.com/demo",
        "--app-name",
        "svc",
        "--venv-dir",
        ".venv",
    ]
}

fn file_count(root: &Path) -> usize {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .count()
}

#[test]
fn test_help_flag() {
    let sandbox = TempDir::new().unwrap();
    embrygen(&sandbox)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("EmbryGo"))
        .stdout(predicate::str::contains("--root-name"));
}

#[test]
fn test_version_flag() {
    let sandbox = TempDir::new().unwrap();
    embrygen(&sandbox)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_bare_invocation_generates_defaults() {
    let sandbox = TempDir::new().unwrap();

    embrygen(&sandbox)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created: "))
        .stdout(predicate::str::contains("Next steps:"))
        .stdout(predicate::str::contains("github.com/r-via/embrygo"));

    let root = sandbox.path().join("tests").join("embrygo-project");
    assert!(root.join("cmd/service-app/main.go").is_file());
    assert!(root.join("tools/.venv").is_dir());
}

#[test]
fn test_generate_demo_project() {
    let sandbox = TempDir::new().unwrap();

    embrygen(&sandbox)
        .arg("generate")
        .args(demo_args())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "EmbryGo project 'demo' generated successfully",
        ))
        .stdout(predicate::str::contains("Go Module Name: example.com/demo"))
        .stdout(predicate::str::contains("1. cd tests/demo"));

    let root = demo_root(&sandbox);
    let go_mod = fs::read_to_string(root.join("go.mod")).unwrap();
    assert!(go_mod.starts_with("module example.com/demo\n"));
    assert!(root.join("cmd/svc/main.go").is_file());
    assert!(root.join(".air.toml").is_file());
    assert!(root.join("internal/database/.gitkeep").is_file());
    assert!(!root.join("internal/services/.gitkeep").exists());
    assert!(!root.join("internal/services/welcome/.gitkeep").exists());
}

#[test]
fn test_declined_overwrite_leaves_tree_untouched() {
    let sandbox = TempDir::new().unwrap();
    let root = demo_root(&sandbox);
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("foreign.txt"), "keep me").unwrap();

    embrygen(&sandbox)
        .args(demo_args())
        .write_stdin("n\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"))
        .stdout(predicate::str::contains("Aborted."));

    assert_eq!(
        fs::read_to_string(root.join("foreign.txt")).unwrap(),
        "keep me"
    );
    assert_eq!(file_count(&root), 1);
}

#[test]
fn test_closed_stdin_declines() {
    let sandbox = TempDir::new().unwrap();
    let root = demo_root(&sandbox);
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("foreign.txt"), "keep me").unwrap();

    embrygen(&sandbox)
        .args(demo_args())
        .write_stdin("")
        .assert()
        .success();

    assert!(root.join("foreign.txt").exists());
    assert!(!root.join("go.mod").exists());
}

#[test]
fn test_accepted_overwrite_replaces_tree() {
    let sandbox = TempDir::new().unwrap();
    let root = demo_root(&sandbox);
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("foreign.txt"), "stale").unwrap();

    embrygen(&sandbox)
        .args(demo_args())
        .write_stdin("Y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed existing directory"));

    assert!(!root.join("foreign.txt").exists());
    assert!(root.join("go.mod").is_file());
}

#[test]
fn test_yes_skips_prompt() {
    let sandbox = TempDir::new().unwrap();
    let root = demo_root(&sandbox);
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("foreign.txt"), "stale").unwrap();

    embrygen(&sandbox)
        .args(demo_args())
        .arg("--yes")
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists").not());

    assert!(!root.join("foreign.txt").exists());
}

#[test]
fn test_dry_run_writes_nothing() {
    let sandbox = TempDir::new().unwrap();

    embrygen(&sandbox)
        .args(demo_args())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Would create dir:"))
        .stdout(predicate::str::contains("go.mod"));

    assert!(!sandbox.path().join("tests").exists());
}

#[test]
fn test_json_report() {
    let sandbox = TempDir::new().unwrap();

    let assert = embrygen(&sandbox)
        .args(["--output-format", "json"])
        .args(demo_args())
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(report["status"], "completed");
    assert_eq!(report["module_id"], "example.com/demo");
    assert_eq!(report["app_name"], "svc");
    assert!(
        report["files_written"]
            .as_array()
            .unwrap()
            .iter()
            .any(|f| f == "go.mod")
    );
    assert!(report["next_steps"].as_array().unwrap().len() > 1);
    assert!(report["generated_at"].is_string());
}

#[test]
fn test_env_overrides_config_defaults() {
    let sandbox = TempDir::new().unwrap();

    embrygen(&sandbox)
        .env("EMBRYGEN__GENERATION__APP_NAME", "from-env")
        .args(["--root-name", "envdemo"])
        .assert()
        .success();

    let root = sandbox.path().join("tests").join("envdemo");
    assert!(root.join("cmd/from-env/main.go").is_file());
}

#[test]
fn test_config_file_and_flag_precedence() {
    let sandbox = TempDir::new().unwrap();
    let config = sandbox.path().join("embrygen.toml");
    fs::write(
        &config,
        "[generation]\nroot_name = \"fromfile\"\napp_name = \"file-app\"\n",
    )
    .unwrap();

    embrygen(&sandbox)
        .arg("--config")
        .arg(&config)
        .args(["--app-name", "flag-app"])
        .assert()
        .success();

    let root = sandbox.path().join("tests").join("fromfile");
    assert!(root.join("cmd/flag-app/main.go").is_file());
    assert!(!root.join("cmd/file-app").exists());
}

#[test]
fn test_templates_dir_pack() {
    let sandbox = TempDir::new().unwrap();
    let pack = sandbox.path().join("pack");
    fs::create_dir_all(pack.join("files")).unwrap();
    fs::write(
        pack.join("template.toml"),
        "[template]\nid = \"mini\"\nversion = \"0.1.0\"\n\n[metadata]\nname = \"Test\"\n\n[[files]]\nsource = \"go.mod\"\n",
    )
    .unwrap();
    fs::write(pack.join("files/go.mod"), "module {{MODULE_ID}}\n").unwrap();

    embrygen(&sandbox)
        .args(demo_args())
        .arg("--templates-dir")
        .arg(&pack)
        .assert()
        .success();

    let root = demo_root(&sandbox);
    assert_eq!(
        fs::read_to_string(root.join("go.mod")).unwrap(),
        "module example.com/demo\n"
    );
    assert!(!root.join("Makefile").exists());
}

#[test]
fn test_completions_bash() {
    let sandbox = TempDir::new().unwrap();
    embrygen(&sandbox)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("embrygen"));
}

#[test]
fn test_config_get_default() {
    let sandbox = TempDir::new().unwrap();
    embrygen(&sandbox)
        .args(["config", "get", "generation.app_name"])
        .assert()
        .success()
        .stdout("service-app\n");
}

#[test]
fn test_init_writes_loadable_config() {
    let sandbox = TempDir::new().unwrap();
    let config = sandbox.path().join("conf").join("embrygen.toml");

    embrygen(&sandbox)
        .arg("--config")
        .arg(&config)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration created"));
    assert!(config.is_file());

    embrygen(&sandbox)
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "generation.venv_dir_name"])
        .assert()
        .success()
        .stdout(".venv\n");

    // A second init without --force keeps the file.
    embrygen(&sandbox)
        .arg("--config")
        .arg(&config)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}
