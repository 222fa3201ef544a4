//! Integration tests for the curlgen CLI

use assert_cmd::Command;
use predicates::prelude::*;

fn curlgen() -> Command {
    Command::cargo_bin("curlgen").unwrap()
}

#[test]
fn test_simple_get_generates_go() {
    curlgen()
        .arg("curl https://api.example.com/users")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "req, err := http.NewRequest(\"GET\", \"https://api.example.com/users\", nil)",
        ))
        .stdout(predicate::str::contains("defer res.Body.Close()"));
}

#[test]
fn test_post_with_header_and_body() {
    curlgen()
        .arg(r#"curl -X POST https://api.example.com/users -H "Content-Type: application/json" -d '{"name":"Bob"}'"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "req, err := http.NewRequest(\"POST\", \"https://api.example.com/users\", payload)",
        ))
        .stdout(predicate::str::contains(
            "req.Header.Add(\"Content-Type\", \"application/json\")",
        ))
        .stdout(predicate::str::contains(r#"strings.NewReader(`{"name":"Bob"}`)"#));
}

#[test]
fn test_command_from_stdin() {
    curlgen()
        .write_stdin("curl https://example.com")
        .assert()
        .success()
        .stdout(predicate::str::contains("package main"));
}

#[test]
fn test_python_target() {
    curlgen()
        .args(["--language", "python", "curl https://example.com"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("import requests"));
}

#[test]
fn test_unknown_language_is_error() {
    curlgen()
        .args(["--language", "cobol", "curl https://example.com"])
        .assert()
        .failure()
        .stdout(predicate::str::starts_with("// Error generating code:"));
}

#[test]
fn test_struct_from_json_payload() {
    curlgen()
        .args(["--struct", r#"curl -X POST https://x -d '{"name":"Bob"}'"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("package main"))
        .stdout(predicate::str::contains("type RequestStruct struct {"))
        .stdout(predicate::str::contains("name string `json:\"name\"`"));
}

#[test]
fn test_rust_struct_with_naming_flags() {
    curlgen()
        .args([
            "--struct",
            "--struct-lang",
            "rust",
            "--root-name",
            "Payload",
            "--export-fields",
            r#"curl -d '{"userName":"Bob"}' https://x"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("pub struct Payload {"))
        .stdout(predicate::str::contains("pub user_name: String,"));
}

#[test]
fn test_struct_without_payload_reports_no_json() {
    curlgen()
        .args(["--struct", "curl https://example.com"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("// No JSON data found in curl command"));
}

#[test]
fn test_dump_parsed() {
    curlgen()
        .args(["--dump-parsed", "curl -X PUT https://example.com -H 'A: b'"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"method\": \"PUT\""))
        .stdout(predicate::str::contains("\"url\": \"https://example.com\""))
        .stdout(predicate::str::contains("\"A\": \"b\""));
}

#[test]
fn test_output_to_file() {
    let path = std::env::temp_dir().join(format!("curlgen-test-{}.go", std::process::id()));
    curlgen()
        .args(["--output", path.to_str().unwrap(), "curl https://example.com"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("package main"));
    std::fs::remove_file(&path).ok();
}
