//! CLI binary tests.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Command with an isolated HOME so no user config is picked up.
fn ansiboard(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ansiboard").unwrap();
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn render_reads_stdin() {
    let home = TempDir::new().unwrap();
    ansiboard(&home)
        .arg("render")
        .write_stdin("^[[31mHello^[[0m World")
        .assert()
        .success()
        .stdout("<span style=\"color: #cc0000\">Hello</span> World");
}

#[test]
fn render_files_in_given_order_with_wrap() {
    let home = TempDir::new().unwrap();
    let a = home.path().join("a.ans");
    let b = home.path().join("b.ans");
    fs::write(&a, "\x1b[1mA").unwrap();
    fs::write(&b, "<b>").unwrap();

    ansiboard(&home)
        .arg("render")
        .arg("--wrap")
        .arg(&b)
        .arg(&a)
        .assert()
        .success()
        .stdout(
            "<pre class=\"ansi\">&lt;b&gt;</pre>\n\
             <pre class=\"ansi\"><span style=\"font-weight: bold\">A</span></pre>\n",
        );
}

#[test]
fn render_separates_unwrapped_files_with_newline() {
    let home = TempDir::new().unwrap();
    let a = home.path().join("a.ans");
    let b = home.path().join("b.ans");
    fs::write(&a, "\x1b[32mfirst").unwrap();
    fs::write(&b, "second").unwrap();

    ansiboard(&home)
        .arg("render")
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout("<span style=\"color: #4e9a06\">first</span>\nsecond");
}

#[test]
fn render_missing_file_fails() {
    let home = TempDir::new().unwrap();
    ansiboard(&home)
        .arg("render")
        .arg(home.path().join("missing.ans"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input file"));
}

#[test]
fn render_uses_config_flag() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.toml");
    fs::write(&config, "[render]\nmalformed_params = \"ignore\"\n").unwrap();

    ansiboard(&home)
        .args(["render", "--config"])
        .arg(&config)
        .write_stdin("\x1b[1;x;4mA")
        .assert()
        .success()
        .stdout("<span style=\"font-weight: bold; text-decoration: underline\">A</span>");
}

#[test]
fn render_rejects_invalid_config() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("bad.toml");
    fs::write(&config, "[render]\npalette = [\"red\"]\n").unwrap();

    ansiboard(&home)
        .args(["render", "--config"])
        .arg(&config)
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Palette must have exactly 16 colors"));
}

#[test]
fn strip_prints_plain_text() {
    let home = TempDir::new().unwrap();
    ansiboard(&home)
        .arg("strip")
        .write_stdin("^[[1;31m<Sysop>^[[0m hi\x1b[K")
        .assert()
        .success()
        .stdout("<Sysop> hi");
}

#[test]
fn detect_exit_codes() {
    let home = TempDir::new().unwrap();
    ansiboard(&home)
        .arg("detect")
        .write_stdin("^[[1mstyled")
        .assert()
        .success()
        .stdout("-: escapes\n");

    ansiboard(&home)
        .arg("detect")
        .write_stdin("plain")
        .assert()
        .code(1)
        .stdout("-: plain\n");
}

#[test]
fn detect_json_output() {
    let home = TempDir::new().unwrap();
    let output = ansiboard(&home)
        .args(["detect", "--json"])
        .write_stdin("\x1b[0m")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["input"], "-");
    assert_eq!(value[0]["has_escapes"], true);
}

#[test]
fn config_show_prints_defaults() {
    let home = TempDir::new().unwrap();
    ansiboard(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config_version = 1"))
        .stdout(predicate::str::contains("malformed_params = \"reset\""));
}

#[test]
fn config_path_honors_override() {
    let home = TempDir::new().unwrap();
    ansiboard(&home)
        .args(["config", "path", "--config", "/tmp/elsewhere.toml"])
        .assert()
        .success()
        .stdout("/tmp/elsewhere.toml\n");
}

#[test]
fn completions_generate_for_bash() {
    let home = TempDir::new().unwrap();
    ansiboard(&home)
        .args(["completions", "--shell", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ansiboard"));
}

#[test]
fn help_lists_subcommands() {
    let home = TempDir::new().unwrap();
    ansiboard(&home)
        .arg("--help")
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("detect"));
}
