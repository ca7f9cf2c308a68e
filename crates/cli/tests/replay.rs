//! End-to-end runs of the `wd replay` binary.

use std::io::Write;
use std::process::{Command, Output};

use serde_json::{Value, json};
use tempfile::NamedTempFile;

fn write_fixture(fixture: &Value) -> NamedTempFile {
	let mut file = NamedTempFile::new().unwrap();
	write!(file, "{fixture}").unwrap();
	file
}

fn replay(fixture: &Value, extra: &[&str]) -> Output {
	let file = write_fixture(fixture);
	Command::new(env!("CARGO_BIN_EXE_wd"))
		.arg("replay")
		.arg(file.path())
		.args(extra)
		.env_remove("RUST_LOG")
		.output()
		.expect("failed to execute wd")
}

fn response_lines(output: &Output) -> Vec<Value> {
	String::from_utf8_lossy(&output.stdout)
		.lines()
		.map(|line| serde_json::from_str(line).unwrap())
		.collect()
}

#[test]
fn prints_one_wire_response_per_command() {
	let output = replay(
		&json!({
			"elements": [{ "id": "e1", "value": "hello" }],
			"commands": [
				{ "name": "clearElement", "locator": { "id": "e1" } },
				{ "name": "clearElement" },
				{ "name": "clearElement", "locator": { "id": "missing" } }
			]
		}),
		&[],
	);

	assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
	assert_eq!(
		response_lines(&output),
		[
			json!({ "status": 0, "value": null }),
			json!({ "status": 400, "value": { "message": "Missing parameter in URL: id" } }),
			json!({ "status": 7, "value": { "message": "Element is no longer valid" } }),
		]
	);
}

#[test]
fn script_failure_uses_generic_message() {
	let output = replay(
		&json!({
			"script": { "throw": "TypeError" },
			"elements": [{ "id": "e1", "value": "x" }],
			"commands": [{ "name": "clearElement", "locator": { "id": "e1" } }]
		}),
		&["--async-scripts"],
	);

	let lines = response_lines(&output);
	assert_eq!(lines[0]["status"], 12);
	let message = lines[0]["value"]["message"].as_str().unwrap();
	assert!(message.starts_with("A JavaScript error was encountered clearing the element."));
}

#[test]
fn timeout_flag_bounds_async_wait() {
	let output = replay(
		&json!({
			"script": { "stall_ms": 2000 },
			"elements": [{ "id": "e1", "value": "x" }],
			"commands": [{ "name": "clearElement", "locator": { "id": "e1" } }]
		}),
		&["--async-scripts", "--script-timeout-ms", "20"],
	);

	assert!(output.status.success());
	assert_eq!(response_lines(&output)[0]["status"], 12);
}

#[test]
fn invalid_fixture_fails_without_output() {
	let mut file = NamedTempFile::new().unwrap();
	write!(file, "{{ not json").unwrap();

	let output = Command::new(env!("CARGO_BIN_EXE_wd"))
		.arg("replay")
		.arg(file.path())
		.output()
		.expect("failed to execute wd");

	assert!(!output.status.success());
	assert!(output.stdout.is_empty());
	assert!(String::from_utf8_lossy(&output.stderr).contains("invalid fixture"));
}
