use std::process::{Command, Output};

// Helper: run the binary with a clean ISBN_* / RUST_LOG environment
fn run_cli(args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_isbn-codec"));
    for key in ["ISBN_OUTPUT", "ISBN_SENTINEL", "ISBN_LOG", "RUST_LOG"] {
        cmd.env_remove(key);
    }
    for (key, value) in env {
        cmd.env(key, value);
    }
    cmd.args(args).output().expect("Failed to run isbn-codec")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_to13_and_to10() {
    let output = run_cli(&["to13", "0306406152"], &[]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "9780306406157");

    let output = run_cli(&["to10", "9780804429573"], &[]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "080442957X");
}

#[test]
fn test_invalid_conversion_fails_with_error_on_stderr() {
    let output = run_cli(&["to13", "030640615X"], &[]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("Cannot convert '030640615X'"));

    let output = run_cli(&["to10", "9780306406151"], &[]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_sentinel_exit_code_is_the_same_in_text_and_json() {
    let output = run_cli(&["--sentinel", "to13", "030640615X"], &[]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "9999999999999");

    let output = run_cli(&["--sentinel", "--json", "to13", "030640615X"], &[]);
    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["output"], "9999999999999");
    assert_eq!(value["valid"], false);

    let output = run_cli(&["--sentinel", "to10", "9780306406151"], &[]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "9999999999");
}

#[test]
fn test_sentinel_does_not_change_valid_conversions() {
    let output = run_cli(&["--sentinel", "to10", "9780306406157"], &[]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "0306406152");

    let output = run_cli(&["--json", "to13", "0306406152"], &[]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["output"], "9780306406157");
}

#[test]
fn test_check_exit_codes() {
    let output = run_cli(&["check", "048665088X"], &[]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "valid ISBN-10 (9780486650883)");

    let output = run_cli(&["check", "9790306406157"], &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).starts_with("invalid (invalid_prefix)"));

    let output = run_cli(&["--json", "check", "12345"], &[]);
    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["error"]["kind"], "unknown_format");
}

#[test]
fn test_demo_passes() {
    let output = run_cli(&["demo"], &[]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).lines().count(), 9);
}

#[test]
fn test_env_selects_json_and_sentinel() {
    let output = run_cli(
        &["to13", "030640615X"],
        &[("ISBN_OUTPUT", "json"), ("ISBN_SENTINEL", "true")],
    );
    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["output"], "9999999999999");
}

#[test]
fn test_unknown_output_format_is_reported() {
    let output = run_cli(&["to13", "0306406152"], &[("ISBN_OUTPUT", "yaml")]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "9780306406157");
    assert!(
        stderr(&output).contains("Unknown ISBN_OUTPUT 'yaml', falling back to text"),
        "stderr was: {}",
        stderr(&output)
    );
}
