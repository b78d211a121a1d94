use std::io::Write;
use std::process::{Command, Output, Stdio};

use serde_json::{json, Value};

fn run(bin: &str, args: &[&str], input: &Value) -> Output {
    let mut child = Command::new(bin)
        .args(args)
        .env("SOLVER", "microlp")
        .env("RUST_LOG", "warn")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start binary");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.to_string().as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout_json(output: &Output) -> Value {
    let stdout = String::from_utf8(output.stdout.clone()).unwrap();
    assert!(stdout.ends_with('\n'));
    serde_json::from_str(&stdout).unwrap()
}

fn params() -> Value {
    json!({
        "demand": [100, 150, 80, 130],
        "setup_cost": 1000,
        "unit_cost": 50,
        "holding_cost": 2
    })
}

#[test]
fn test_lot_sizing_cli_prints_plan() {
    let output = run(env!("CARGO_BIN_EXE_lot_sizing"), &[], &params());
    assert!(output.status.success());

    let plan = stdout_json(&output);
    assert_eq!(plan["setup"], json!([1, 0, 0, 0]));
    assert!((plan["total_cost"].as_f64().unwrap() - 25400.0).abs() < 1e-4);
}

#[test]
fn test_lot_sizing_cli_basic_flag_prints_pair() {
    let output = run(env!("CARGO_BIN_EXE_lot_sizing"), &["--basic"], &params());
    assert!(output.status.success());

    let pair = stdout_json(&output);
    assert_eq!(pair.as_array().unwrap().len(), 2);
    assert!((pair[1].as_f64().unwrap() - 25400.0).abs() < 1e-4);
}

#[test]
fn test_cap_lot_sizing_cli_binding_capacity() {
    let mut input = params();
    input["capacity"] = json!([200, 200, 200, 200]);
    let output = run(env!("CARGO_BIN_EXE_cap_lot_sizing"), &[], &input);
    assert!(output.status.success());

    let plan = stdout_json(&output);
    assert_eq!(plan["setup"], json!([1, 1, 0, 1]));
    assert!((plan["total_cost"].as_f64().unwrap() - 26220.0).abs() < 1e-4);
}

#[test]
fn test_cap_lot_sizing_cli_length_mismatch_fails() {
    let mut input = params();
    input["capacity"] = json!([90, 90, 90]);
    let output = run(env!("CARGO_BIN_EXE_cap_lot_sizing"), &[], &input);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("same length"));
}

#[test]
fn test_cap_lot_sizing_cli_infeasible_fails() {
    let mut input = params();
    input["capacity"] = json!([90, 90, 90, 90]);
    let output = run(env!("CARGO_BIN_EXE_cap_lot_sizing"), &[], &input);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_fetch_mcp_cli_without_credentials_fails() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_fetch_mcp"))
        .env_remove("EPIAS_USERNAME")
        .env_remove("EPIAS_PASSWORD")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start binary");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(br#"{"start_date": "2025-07-23", "end_date": "2025-07-23"}"#)
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("fetch_mcp"));
}
