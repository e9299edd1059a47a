//! End-to-end tests driving the lectern binary against a mock server.
//!
//! The binary runs in a child process while wiremock serves the target API
//! from the test's runtime, so every assertion here covers the full path
//! from argument parsing down to the wire.

mod common;

use std::process::Output;

use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Run the binary on the blocking pool so the mock server stays responsive.
async fn run_lectern(args: &[&str]) -> Output {
    let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
    tokio::task::spawn_blocking(move || {
        let refs: Vec<&str> = args.iter().map(String::as_str).collect();
        common::run_cli(&refs)
    })
    .await
    .expect("CLI task panicked")
}

/// Mount every scenario endpoint; `ping_status` controls `GET /ip`.
async fn mount_scenario(server: &MockServer, ping_status: u16) {
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "accessToken": "test-token"
        })))
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(ResponseTemplate::new(201))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/auth/user"))
        .respond_with(ResponseTemplate::new(200))
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/lectures"))
        .respond_with(ResponseTemplate::new(201))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/lectures/2"))
        .respond_with(ResponseTemplate::new(200))
        .mount(server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/lectures/1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/lectures/1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/lectures/1/image"))
        .respond_with(ResponseTemplate::new(200))
        .mount(server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/lectures/2/image"))
        .respond_with(ResponseTemplate::new(200))
        .mount(server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/lectures/1/image"))
        .respond_with(ResponseTemplate::new(204))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ip"))
        .respond_with(ResponseTemplate::new(ping_status).set_body_string("127.0.0.1"))
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_run_prints_request_lines_and_summary() {
    let server = MockServer::start().await;
    mount_scenario(&server, 200).await;
    let base = server.uri();

    let output = run_lectern(&["run", "--base-url", &base, "--pause", "0"]).await;

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);

    // One plain line per request: piped output carries no color codes.
    assert!(stdout.contains(&format!("POST {base}/api/auth/login: 200 | Duration:")));
    assert!(stdout.contains(&format!("PUT {base}/api/lectures/2/image: 200 | Duration:")));
    assert!(stdout.contains(&format!("GET {base}/ip: 200 | Duration:")));
    assert_eq!(
        stdout.lines().filter(|l| l.contains(" | Duration: ")).count(),
        12
    );

    assert!(stdout.contains("All checks passed"));
    assert!(stdout.contains("Iterations: 1"));
    assert!(stdout.contains("Requests: 12"));
    assert!(stdout.contains("Checks: 12 passed, 0 failed"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_run_writes_summary_json() {
    let server = MockServer::start().await;
    mount_scenario(&server, 200).await;
    let base = server.uri();

    let dir = tempfile::tempdir().unwrap();
    let summary_path = dir.path().join("summary.json");
    let summary_arg = summary_path.to_str().unwrap().to_string();

    let output = run_lectern(&[
        "run",
        "--base-url",
        &base,
        "--iterations",
        "2",
        "--pause",
        "0",
        "--summary",
        &summary_arg,
    ])
    .await;

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let summary: Value =
        serde_json::from_str(&std::fs::read_to_string(&summary_path).unwrap()).unwrap();
    assert_eq!(summary["vus"], 1);
    assert_eq!(summary["iterations"], 2);
    // Twelve requests on the first iteration, eleven once the token is cached.
    assert_eq!(summary["requests"], 23);
    assert_eq!(summary["checksFailed"], 0);
    assert_eq!(summary["groups"].as_array().unwrap().len(), 4);
    assert_eq!(summary["groups"][0]["name"], "Authentication");
    assert_eq!(summary["groups"][3]["name"], "TestAPI");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_run_fails_when_login_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    let base = server.uri();

    let output = run_lectern(&["run", "--base-url", &base, "--pause", "0"]).await;

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.contains(&format!("POST {base}/api/auth/login: 401 | Duration:")));
    assert!(stderr.contains("authentication failed"));
    assert!(stderr.contains("401"));

    // Nothing ran past the rejected login.
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_run_fails_when_a_check_fails() {
    let server = MockServer::start().await;
    mount_scenario(&server, 500).await;
    let base = server.uri();

    let output = run_lectern(&["run", "--base-url", &base, "--pause", "0"]).await;

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    // The failed probe is recorded and printed, not raised mid-run.
    assert!(stdout.contains(&format!("GET {base}/ip: 500 | Duration:")));
    assert!(stdout.contains("Checks: 11 passed, 1 failed"));
    assert!(stderr.contains("checks failed"));

    // All twelve requests still went out.
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 12);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_run_uploads_a_custom_image() {
    let server = MockServer::start().await;
    mount_scenario(&server, 200).await;
    let base = server.uri();

    let dir = tempfile::tempdir().unwrap();
    let image_path = dir.path().join("team-photo.jpeg");
    std::fs::write(&image_path, b"\xff\xd8custom-image-payload\xff\xd9").unwrap();
    let image_arg = image_path.to_str().unwrap().to_string();

    let output = run_lectern(&[
        "run",
        "--base-url",
        &base,
        "--pause",
        "0",
        "--image",
        &image_arg,
    ])
    .await;

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let requests = server.received_requests().await.unwrap();
    let upload = requests
        .iter()
        .find(|r| r.method.to_string() == "PUT" && r.url.path() == "/api/lectures/2/image")
        .expect("upload request not found");
    let body = String::from_utf8_lossy(&upload.body);
    assert!(body.contains(r#"filename="team-photo.jpeg""#));
    assert!(body.contains("custom-image-payload"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_ping_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ip"))
        .respond_with(ResponseTemplate::new(200).set_body_string("127.0.0.1"))
        .mount(&server)
        .await;
    let base = server.uri();

    let output = run_lectern(&["ping", "--no-color", "--base-url", &base]).await;

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&format!("GET {base}/ip: 200 | Duration:")));
    assert!(stdout.contains("is reachable"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_ping_unreachable_fails() {
    // Nothing listens on port 1.
    let output = run_lectern(&["ping", "--base-url", "http://127.0.0.1:1"]).await;

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.contains(": 0 | Duration:"));
    assert!(stderr.contains("not healthy"));
}
