//! End-to-end tests running the palette-snoop binary.

mod common;

use common::fixtures::{configs, palettes};
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn snoop() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_palette-snoop"));
    cmd.env_remove("CONFIG_FILE").env_remove("RUST_LOG");
    cmd
}

fn run_with_stdin(mut cmd: Command, stdin: &str) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_enrich_from_stdin() {
    let mut cmd = snoop();
    cmd.arg("enrich");
    let output = run_with_stdin(cmd, palettes::PRIMARIES_RESPONSE);

    assert!(output.status.success(), "{output:?}");
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["textColor"], "#FFFFFF");
    assert_eq!(items[0]["matchingPantone"]["code"], "PMS 172 C");
}

#[test]
fn test_enrich_file_to_file_compact() {
    let (dir, input) = common::temp_file("palette.json", palettes::BARE_WITH_EXTRAS);
    let out_path = dir.path().join("enriched.json");

    let output = snoop()
        .arg("enrich")
        .arg(&input)
        .arg("-o")
        .arg(&out_path)
        .arg("--compact")
        .output()
        .unwrap();

    assert!(output.status.success(), "{output:?}");
    assert!(output.stdout.is_empty());
    let written = std::fs::read_to_string(&out_path).unwrap();
    assert_eq!(written.lines().count(), 1);
    let json: Value = serde_json::from_str(&written).unwrap();
    assert_eq!(json[1]["source"]["image"], 2);
}

#[test]
fn test_enrich_malformed_fails_with_index() {
    let mut cmd = snoop();
    cmd.arg("enrich").arg("-");
    let output = run_with_stdin(cmd, palettes::MALFORMED_SECOND);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("palette item 1"), "{stderr}");
    assert!(stderr.contains("#12"), "{stderr}");
}

#[test]
fn test_match_command() {
    let output = snoop().args(["match", "#FF0000", "C8102E"]).output().unwrap();

    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("#FF0000  (text #FFFFFF)"), "{stdout}");
    assert!(stdout.contains("Cadmium Red Light"), "{stdout}");
    assert!(stdout.contains("PMS 186 C Red #C8102E  dE 0.00"), "{stdout}");
}

#[test]
fn test_match_command_rejects_bad_hex() {
    let output = snoop().args(["match", "#FFF"]).output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_catalog_command_with_custom_config() {
    let (_dir, config) = common::temp_file("config.yaml", configs::TWO_TONE);
    let output = snoop()
        .arg("--config")
        .arg(&config)
        .args(["catalog", "inks"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("custom inks (2 colors)"), "{stdout}");
    assert!(stdout.contains("K Black"), "{stdout}");
}

#[test]
fn test_status_without_subcommand() {
    let output = snoop().output().unwrap();

    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Config:   embedded"), "{stdout}");
    assert!(stdout.contains("Embedded: config.yaml"), "{stdout}");
    assert!(stdout.contains("Golden Heavy Body Acrylics"), "{stdout}");
    assert!(stdout.contains("Pantone Coated"), "{stdout}");
}

#[test]
fn test_init_writes_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");

    let output = snoop()
        .arg("--config")
        .arg(&path)
        .arg("init")
        .output()
        .unwrap();
    assert!(output.status.success(), "{output:?}");
    assert!(std::fs::read_to_string(&path).unwrap().contains("pretty: true"));

    let again = snoop()
        .arg("--config")
        .arg(&path)
        .arg("init")
        .output()
        .unwrap();
    assert!(again.status.success());
    assert!(String::from_utf8_lossy(&again.stdout).contains("Skipped 1 existing files"));
}
