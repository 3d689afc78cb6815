//! Integration tests for the nodeprep binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use nodeprep::venv::VenvLayout;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temp tree with `<tmp>/ComfyUI` as a valid application root.
fn setup_app() -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("ComfyUI");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("main.py"), "").unwrap();
    fs::write(root.join("folder_paths.py"), "").unwrap();
    (temp, root)
}

fn make_venv(dir: &Path) {
    let marker = VenvLayout::current().marker_path(dir);
    fs::create_dir_all(marker.parent().unwrap()).unwrap();
    fs::write(marker, "").unwrap();
}

fn make_plugin(root: &Path, name: &str, manifest: bool) {
    let dir = root.join("custom_nodes").join(name);
    fs::create_dir_all(&dir).unwrap();
    if manifest {
        fs::write(dir.join("requirements.txt"), "requests\n").unwrap();
    }
}

/// The binary with a clean nodeprep environment.
fn nodeprep() -> Command {
    let mut cmd = Command::new(cargo_bin("nodeprep"));
    for var in [
        "NODEPREP_CONFIG",
        "NODEPREP_PYTHON",
        "NODEPREP_PROMPT_APP_ROOT",
        "NODEPREP_PROMPT_VENV_PATH",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = nodeprep();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage: nodeprep"))
        .stdout(predicate::str::contains("completions"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = nodeprep();
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_unknown_flag_is_usage_error() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = nodeprep();
    cmd.arg("--no-such-flag");
    cmd.assert().code(2);
    Ok(())
}

#[test]
fn cli_no_args_runs_setup() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, root) = setup_app();
    make_venv(&root.join("venv"));

    let mut cmd = nodeprep();
    cmd.env("NODEPREP_PROMPT_APP_ROOT", &root);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Setup complete!"));

    assert!(root.join("custom_nodes").is_dir());
    Ok(())
}

#[test]
fn cli_run_uses_supplied_venv() -> Result<(), Box<dyn std::error::Error>> {
    let (temp, root) = setup_app();
    let venv = temp.path().join("envs").join("comfy");
    make_venv(&venv);

    let mut cmd = nodeprep();
    cmd.arg("run")
        .env("NODEPREP_PROMPT_APP_ROOT", &root)
        .env("NODEPREP_PROMPT_VENV_PATH", &venv);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Setup complete!"));
    Ok(())
}

#[test]
fn cli_run_without_answers_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = nodeprep();
    cmd.arg("run");
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("NODEPREP_PROMPT_APP_ROOT"));
    Ok(())
}

#[test]
fn cli_run_rejects_invalid_root() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("main.py"), "").unwrap();

    let mut cmd = nodeprep();
    cmd.arg("run").env("NODEPREP_PROMPT_APP_ROOT", temp.path());
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("does not appear to be"));
    Ok(())
}

#[test]
fn cli_run_rejects_invalid_venv() -> Result<(), Box<dyn std::error::Error>> {
    let (temp, root) = setup_app();
    let bogus = temp.path().join("bogus");
    fs::create_dir_all(&bogus).unwrap();

    let mut cmd = nodeprep();
    cmd.arg("run")
        .env("NODEPREP_PROMPT_APP_ROOT", &root)
        .env("NODEPREP_PROMPT_VENV_PATH", &bogus);
    cmd.assert().code(1).stderr(predicate::str::contains(
        "does not appear to be a valid virtual environment",
    ));

    assert!(!root.join("custom_nodes").exists());
    Ok(())
}

#[test]
fn cli_run_venv_creation_failure_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, root) = setup_app();

    let mut cmd = nodeprep();
    cmd.arg("run")
        .env("NODEPREP_PROMPT_APP_ROOT", &root)
        .env("NODEPREP_PROMPT_VENV_PATH", "")
        .env("NODEPREP_PYTHON", "nodeprep-test-no-such-python");
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Error creating virtual environment"));
    Ok(())
}

#[test]
fn cli_run_plugin_failure_does_not_fail_run() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, root) = setup_app();
    make_venv(&root.join("venv"));
    make_plugin(&root, "broken", true);
    make_plugin(&root, "plain", false);

    let mut cmd = nodeprep();
    cmd.arg("run")
        .env("NODEPREP_PROMPT_APP_ROOT", &root)
        .env("NODEPREP_PYTHON", "nodeprep-test-no-such-python");
    cmd.assert()
        .success()
        .stderr(predicate::str::contains(
            "Error installing requirements for broken",
        ))
        .stdout(predicate::str::contains("Setup complete!"));
    Ok(())
}

#[test]
fn cli_run_json_report() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, root) = setup_app();
    make_venv(&root.join(".venv"));
    make_plugin(&root, "plain", false);

    let mut cmd = nodeprep();
    cmd.args(["run", "--json"])
        .env("NODEPREP_PROMPT_APP_ROOT", &root);
    let output = cmd.assert().success().get_output().stdout.clone();

    let json: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(json["venv"]["origin"], "discovered");
    assert_eq!(json["report"]["outcomes"][0]["name"], "plain");
    assert_eq!(json["report"]["outcomes"][0]["status"], "skipped");
    Ok(())
}

#[test]
fn cli_run_honors_config_file() -> Result<(), Box<dyn std::error::Error>> {
    let (temp, root) = setup_app();
    make_venv(&root.join("venv"));
    let config = temp.path().join("nodeprep.yml");
    fs::write(&config, "plugins_dir: extensions\n")?;

    let mut cmd = nodeprep();
    cmd.arg("--config")
        .arg(&config)
        .arg("run")
        .env("NODEPREP_PROMPT_APP_ROOT", &root);
    cmd.assert().success();

    assert!(root.join("extensions").is_dir());
    assert!(!root.join("custom_nodes").exists());
    Ok(())
}

#[test]
fn cli_missing_config_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();

    let mut cmd = nodeprep();
    cmd.env("NODEPREP_CONFIG", temp.path().join("absent.yml"))
        .arg("run");
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn cli_list_shows_plugins() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, root) = setup_app();
    make_plugin(&root, "with-reqs", true);
    make_plugin(&root, "bare", false);

    let mut cmd = nodeprep();
    cmd.args(["--no-color", "list"])
        .env("NODEPREP_PROMPT_APP_ROOT", &root);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("with-reqs"))
        .stdout(predicate::str::contains("bare"))
        .stdout(predicate::str::contains("no requirements"));

    assert!(!root.join("venv").exists());
    Ok(())
}

#[test]
fn cli_list_json() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, root) = setup_app();
    make_plugin(&root, "a", true);

    let mut cmd = nodeprep();
    cmd.args(["list", "--json"])
        .env("NODEPREP_PROMPT_APP_ROOT", &root);
    let output = cmd.assert().success().get_output().stdout.clone();

    let json: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(json[0]["name"], "a");
    assert!(json[0]["manifest"].is_string());
    Ok(())
}

#[test]
fn cli_completions_bash() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = nodeprep();
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("nodeprep"));
    Ok(())
}
