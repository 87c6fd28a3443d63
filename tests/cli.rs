use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

/// Command with the config dir pointed at an empty temp dir.
fn onec(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("onec-mcp").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn calculate_divide_by_zero_reports_error_text() {
    let home = tempfile::tempdir().unwrap();
    onec(&home)
        .args(["call", "calculate", "--args", r#"{"a":10,"b":0,"operation":"divide"}"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("division by zero"));
}

#[test]
fn calculate_multiplies() {
    let home = tempfile::tempdir().unwrap();
    onec(&home)
        .args(["call", "calculate", "--args", r#"{"a":6,"b":7,"operation":"multiply"}"#])
        .assert()
        .success()
        .stdout("6 × 7 = 42\n");
}

#[test]
fn generate_test_data_over_limit() {
    let home = tempfile::tempdir().unwrap();
    onec(&home)
        .args(["call", "generate_test_data", "--args", r#"{"count":21}"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("maximum 20"))
        .stdout(predicate::str::contains("1. ").not());
}

#[test]
fn generate_test_data_three_records() {
    let home = tempfile::tempdir().unwrap();
    onec(&home)
        .args(["call", "generate_test_data", "--args", r#"{"count":3}"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("\n3. "))
        .stdout(predicate::str::contains("\n4. ").not());
}

#[test]
fn unknown_tool_fails() {
    let home = tempfile::tempdir().unwrap();
    onec(&home)
        .args(["call", "launch_rockets"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown tool: launch_rockets"));
}

#[test]
fn non_object_args_fail() {
    let home = tempfile::tempdir().unwrap();
    onec(&home)
        .args(["call", "greet", "--args", "[1,2]"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON object"));
}

#[test]
fn tools_json_lists_six() {
    let home = tempfile::tempdir().unwrap();
    let output = onec(&home)
        .args(["tools", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let tools: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = tools
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "calculate",
            "generate_test_data",
            "get_resource",
            "get_status",
            "greet",
            "list_resources",
        ]
    );
    assert_eq!(tools[0]["input_schema"]["type"], "object");
}

#[test]
fn missing_resource_fails_with_error_payload() {
    let home = tempfile::tempdir().unwrap();
    onec(&home)
        .args(["resource", "nonexistent", "--format", "json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"error\""))
        .stdout(predicate::str::contains("\"result\"").not());
}

#[test]
fn server_info_resource_prints_document() {
    let home = tempfile::tempdir().unwrap();
    onec(&home)
        .args(["resource", "server_info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MCP server for 1C:Enterprise"));
}

#[test]
fn config_file_feeds_status() {
    let home = tempfile::tempdir().unwrap();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[server]\nname = \"ledger-demo\"\nauthor = \"@qa\"").unwrap();

    onec(&home)
        .arg("--config")
        .arg(file.path())
        .args(["call", "get_status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[status] ledger-demo v"))
        .stdout(predicate::str::contains("author: @qa"));
}

#[test]
fn default_config_dir_is_read() {
    let home = tempfile::tempdir().unwrap();
    // XDG layout plus the macOS equivalent under $HOME
    for base in [home.path().to_path_buf(), home.path().join("Library/Application Support")] {
        let dir = base.join("onec-mcp");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.toml"), "[server]\nauthor = \"@from-xdg\"\n").unwrap();
    }

    onec(&home)
        .args(["config", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("@from-xdg"));
}

#[test]
fn missing_explicit_config_fails() {
    let home = tempfile::tempdir().unwrap();
    onec(&home)
        .args(["--config", "/definitely/not/here.toml", "tools"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config error"));
}

#[test]
fn debug_flag_logs_to_stderr_only() {
    let home = tempfile::tempdir().unwrap();
    onec(&home)
        .args(["--debug", "call", "calculate", "--args", r#"{"a":1,"b":1}"#])
        .assert()
        .success()
        .stdout("1 + 1 = 2\n")
        .stderr(predicate::str::contains("tool call"));
}

#[test]
fn fatal_error_is_reported_once() {
    let home = tempfile::tempdir().unwrap();
    let output = onec(&home)
        .args(["call", "launch_rockets"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.matches("unknown tool: launch_rockets").count(), 1);
}

#[test]
fn config_error_reaches_stderr_before_logging_starts() {
    let home = tempfile::tempdir().unwrap();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[server\nname = ").unwrap();

    let output = onec(&home)
        .arg("--config")
        .arg(file.path())
        .arg("tools")
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.matches("config parse error").count(), 1);
}
