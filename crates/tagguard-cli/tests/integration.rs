//! Integration tests for CLI commands.

use serde_json::{json, Value};
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

const FIELD: &str = "dbk-additionalField-03";

fn write_json(dir: &Path, name: &str, value: &Value) -> String {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_vec_pretty(value).unwrap()).unwrap();
    path.to_string_lossy().to_string()
}

fn make_resources() -> Value {
    json!([
        { "name": "Dr. Smith", "tags": [{ "name": "VIP" }, { "name": "Extra" }] },
        { "name": "Dr. Jones", "tags": [{ "name": "VIP" }, { "name": "Extra" }] },
        { "name": "Projector", "tags": [{ "name": "Equipment" }] }
    ])
}

fn make_event(resources: &[&str], required: Value) -> Value {
    json!({
        "title": "Consultation",
        "resource": resources,
        FIELD: required
    })
}

struct Fixture {
    _dir: TempDir,
    resources: String,
    config: String,
    dir: std::path::PathBuf,
}

fn create_fixture() -> Fixture {
    let dir = TempDir::new().unwrap();
    let path = dir.path().to_path_buf();
    let resources = write_json(&path, "resources.json", &make_resources());
    let config = write_json(&path, "config.json", &json!({ "tag_match_field": FIELD }));
    Fixture {
        _dir: dir,
        resources,
        config,
        dir: path,
    }
}

fn run_cli(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_tagguard"))
        .args(args)
        .output()
        .expect("Failed to execute CLI");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    (output.status.code().unwrap_or(-1), stdout, stderr)
}

#[test]
fn test_check_passes_when_tags_present() {
    let fx = create_fixture();
    let event = write_json(&fx.dir, "event.json", &make_event(&["Dr. Smith", "Dr. Jones"], json!(["VIP"])));

    let (code, stdout, _) = run_cli(&[
        "check", "--event", &event, "--resources", &fx.resources, "--config", &fx.config,
        "--strict",
    ]);
    assert_eq!(code, 0);
    assert!(stdout.contains("PROCEED"));
    assert!(stdout.contains("satisfied"));
}

#[test]
fn test_check_blocks_missing_tag_json() {
    let fx = create_fixture();
    let event = write_json(&fx.dir, "event.json", &make_event(&["Dr. Smith"], json!("VIP, Bilingual")));

    let (code, stdout, _) = run_cli(&[
        "check", "--event", &event, "--resources", &fx.resources, "--config", &fx.config,
        "--json",
    ]);
    assert_eq!(code, 0);
    let parsed: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["decision"], "blocked");
    assert_eq!(parsed["required_tags"], json!(["VIP", "Bilingual"]));
    assert_eq!(parsed["matched_count"], 1);
    assert_eq!(parsed["buttons"]["cancel"], "Cancel");
}

#[test]
fn test_check_strict_exit_code_when_blocked() {
    let fx = create_fixture();
    let event = write_json(&fx.dir, "event.json", &make_event(&["Projector"], json!("VIP")));

    let (code, stdout, _) = run_cli(&[
        "check", "--event", &event, "--resources", &fx.resources, "--config", &fx.config,
        "--strict",
    ]);
    assert_eq!(code, 2);
    assert!(stdout.contains("BLOCKED"));
}

#[test]
fn test_check_drag_and_drop_offers_revert() {
    let fx = create_fixture();
    let event = write_json(&fx.dir, "event.json", &make_event(&["Projector"], json!("VIP")));

    let (_, stdout, _) = run_cli(&[
        "check", "--event", &event, "--original", &event, "--resources", &fx.resources,
        "--config", &fx.config, "--before-drop", "--json",
    ]);
    let parsed: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["decision"], "blocked");
    assert_eq!(parsed["buttons"]["cancel"], "Revert");
}

#[test]
fn test_check_unchanged_event_is_skipped() {
    let fx = create_fixture();
    let event = write_json(&fx.dir, "event.json", &make_event(&["Projector"], json!("VIP")));

    let (code, stdout, _) = run_cli(&[
        "check", "--event", &event, "--original", &event, "--resources", &fx.resources,
        "--config", &fx.config, "--json", "--strict",
    ]);
    assert_eq!(code, 0);
    let parsed: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["reason"], "unchanged");
}

#[test]
fn test_check_field_flag_overrides_config() {
    let fx = create_fixture();
    let event = write_json(
        &fx.dir,
        "event.json",
        &json!({ "resource": ["Projector"], "tags_needed": "VIP" }),
    );

    let (code, _, _) = run_cli(&[
        "check", "--event", &event, "--resources", &fx.resources, "--field", "tags_needed",
        "--strict",
    ]);
    assert_eq!(code, 2);
}

#[test]
fn test_check_account_restriction() {
    let fx = create_fixture();
    let config = write_json(
        &fx.dir,
        "restricted.json",
        &json!({ "tag_match_field": FIELD, "restricted_to_accounts": ["admin@domain.com"] }),
    );
    let event = write_json(&fx.dir, "event.json", &make_event(&["Projector"], json!("VIP")));

    let (code, stdout, _) = run_cli(&[
        "check", "--event", &event, "--resources", &fx.resources, "--config", &config,
        "--account", "person@domain.com", "--json", "--strict",
    ]);
    assert_eq!(code, 0);
    let parsed: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["reason"], "account_not_listed");
}

#[test]
fn test_check_missing_event_file_fails() {
    let fx = create_fixture();
    let missing = fx.dir.join("nope.json");

    let (code, _, stderr) = run_cli(&[
        "check", "--event", &missing.to_string_lossy(), "--resources", &fx.resources,
    ]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Error"));
}

#[test]
fn test_normalize_delimited_and_array_agree() {
    let (code, delimited, _) = run_cli(&["normalize", "a, b, c", "--json"]);
    assert_eq!(code, 0);
    let (_, array, _) = run_cli(&["normalize", r#"["a","b","c"]"#, "--json"]);

    let delimited: Value = serde_json::from_str(&delimited).unwrap();
    let array: Value = serde_json::from_str(&array).unwrap();
    assert_eq!(delimited, json!(["a", "b", "c"]));
    assert_eq!(delimited, array);
}

#[test]
fn test_normalize_plain_output() {
    let (code, stdout, _) = run_cli(&["normalize", " VIP ,Bilingual"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.lines().collect::<Vec<_>>(), vec!["VIP", "Bilingual"]);
}

#[test]
fn test_resources_listing() {
    let fx = create_fixture();

    let (code, stdout, _) = run_cli(&["resources", &fx.resources]);
    assert_eq!(code, 0);
    assert!(stdout.contains("RESOURCE"));
    assert!(stdout.contains("Dr. Smith"));
    assert!(stdout.contains("VIP, Extra"));

    let (_, stdout, _) = run_cli(&["resources", &fx.resources, "--json"]);
    let parsed: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed[2]["tags"], json!(["Equipment"]));
}
