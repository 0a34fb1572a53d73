//! CLI integration tests for the status and plot commands
//!
//! These tests run the plotbridge binary against a mock rendering service
//! and check exit codes, printed messages, and written files.

use std::fs;
use std::net::TcpListener;
use std::process::{Command, Output};

use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PNG_BYTES: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

const REQUEST_JSON: &str = r#"{
    "chart_type": "bar",
    "title": "Arrivals 2024",
    "subtitle": "",
    "x_label": "Month",
    "y_label": "People",
    "data": { "labels": ["Jan", "Feb"], "values": [3, 4] }
}"#;

/// Run the plotbridge binary with a clean environment for config discovery.
fn plotbridge(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_plotbridge"))
        .args(args)
        .current_dir(dir.path())
        .env_remove("PLOTBRIDGE_BASE_URL")
        .env_remove("PLOTBRIDGE_TIMEOUT_SECS")
        .env("XDG_CONFIG_HOME", dir.path())
        .output()
        .expect("Failed to execute plotbridge")
}

fn unused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("should bind ephemeral port");
    let port = listener.local_addr().expect("should have local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

#[tokio::test(flavor = "multi_thread")]
async fn test_status_reachable_exits_zero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let output = plotbridge(&dir, &["status", "--base-url", &server.uri()]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(String::from_utf8_lossy(&output.stdout).contains("running and accessible"));
}

#[test]
fn test_status_unreachable_exits_one() {
    let dir = TempDir::new().unwrap();
    let base_url = unused_base_url();
    let output = plotbridge(&dir, &["status", "--base-url", &base_url]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains(&base_url));
}

#[test]
fn test_status_uses_config_file() {
    let dir = TempDir::new().unwrap();
    let base_url = unused_base_url();
    fs::write(dir.path().join("plotbridge.toml"), format!("[service]\nbase_url = \"{base_url}\"\n"))
        .unwrap();

    let output = plotbridge(&dir, &["status"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains(&base_url));
}

#[test]
fn test_invalid_base_url_rejected() {
    let dir = TempDir::new().unwrap();
    let output = plotbridge(&dir, &["status", "--base-url", "not-a-url"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("service.base_url"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_plot_writes_png() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/plot"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(PNG_BYTES))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("request.json"), REQUEST_JSON).unwrap();

    let output = plotbridge(&dir, &["plot", "request.json", "--base-url", &server.uri()]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let written = fs::read(dir.path().join("arrivals_2024.png")).expect("PNG should be written");
    assert_eq!(written, PNG_BYTES);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_plot_remote_error_exits_one() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/plot"))
        .respond_with(ResponseTemplate::new(500).set_body_string(r#"{"error":"bad data"}"#))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("request.json"), REQUEST_JSON).unwrap();

    let output = plotbridge(
        &dir,
        &["plot", "request.json", "-o", "out.png", "--base-url", &server.uri()],
    );

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("500"));
    assert!(stderr.contains("bad data"));
    assert!(!dir.path().join("out.png").exists());
}

#[test]
fn test_plot_malformed_request_exits_two() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("request.json"), r#"{"chart_type": "bar"}"#).unwrap();

    let output = plotbridge(&dir, &["plot", "request.json"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid chart request"));
}
