//! CLI integration tests.
//!
//! Offline commands run as-is; networked commands run against a wiremock
//! server passed in through `DIADOC_HOST`.

mod common;

use diadoc_core::wire::LoginPassword;
use diadoc_core::Credentials;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

use common::{CLIENT_ID, LOGIN, PASSWORD, run_cli, run_cli_with_account, stdout_of, token_file};

/// Exact match on the raw `Authorization` value.
struct Authorized(String);

impl Match for Authorized {
    fn matches(&self, request: &Request) -> bool {
        request
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            == Some(self.0.as_str())
    }
}

fn authed(token: &str) -> Authorized {
    Authorized(format!(
        "DiadocAuth ddauth_api_client_id={CLIENT_ID},ddauth_token={token}"
    ))
}

async fn mount_login(server: &MockServer, token: &str) {
    let body = LoginPassword::from_credentials(&Credentials::new(LOGIN, PASSWORD, CLIENT_ID))
        .to_bytes();
    Mock::given(method("POST"))
        .and(path("/V3/Authenticate"))
        .and(query_param("type", "password"))
        .and(wiremock::matchers::body_bytes(body.to_vec()))
        .respond_with(ResponseTemplate::new(200).set_body_string(token))
        .mount(server)
        .await;
}

// ============================================================================
// Offline commands
// ============================================================================

#[tokio::test]
async fn explain_known_status() {
    let home = TempDir::new().unwrap();
    let args = ["explain", "GetDepartment", "404"];

    let output = run_cli(&args, home.path()).await;
    let stdout = stdout_of(&args, &output);

    assert!(stdout.contains("Resource: GetDepartment"));
    assert!(stdout.contains("не найдена организация или подразделение"));
}

#[tokio::test]
async fn explain_unregistered_status() {
    let home = TempDir::new().unwrap();
    let args = ["explain", "GetDepartment", "418"];

    let output = run_cli(&args, home.path()).await;
    let stdout = stdout_of(&args, &output);

    assert!(stdout.contains("No diagnostic registered"));
}

#[tokio::test]
async fn explain_unknown_resource_fails() {
    let home = TempDir::new().unwrap();

    let output = run_cli(&["explain", "NoSuchThing", "404"], home.path()).await;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("NoSuchThing"), "stderr: {stderr}");
}

#[tokio::test]
async fn resources_as_json_lines() {
    let home = TempDir::new().unwrap();
    let args = ["resources", "--json"];

    let output = run_cli(&args, home.path()).await;
    let stdout = stdout_of(&args, &output);

    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    let print_form = lines
        .iter()
        .find(|r| r["name"] == "GetGeneratedPrintForm")
        .expect("print form resource listed");
    assert_eq!(print_form["completion"], "polled");
    assert_eq!(print_form["method"], "GET");

    let last_event = lines.iter().find(|r| r["name"] == "GetLastEvent").unwrap();
    assert_eq!(last_event["completion"], "empty-on-no-content");
}

#[tokio::test]
async fn networked_command_requires_credentials() {
    let home = TempDir::new().unwrap();

    let output = run_cli(&["whoami"], home.path()).await;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--login"), "stderr: {stderr}");
}

// ============================================================================
// Networked commands
// ============================================================================

#[tokio::test]
async fn login_stores_token() {
    let server = MockServer::start().await;
    mount_login(&server, "cli-token").await;
    let home = TempDir::new().unwrap();
    let args = ["login"];

    let output = run_cli_with_account(&args, home.path(), &server.uri()).await;
    let stdout = stdout_of(&args, &output);
    assert!(stdout.contains("Logged in successfully"));

    let stored: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(token_file(home.path())).unwrap()).unwrap();
    assert_eq!(stored["token"], "cli-token");
    assert_eq!(stored["login"], LOGIN);
    assert_eq!(stored["client_id"], CLIENT_ID);
}

#[cfg(unix)]
#[tokio::test]
async fn token_file_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let server = MockServer::start().await;
    mount_login(&server, "cli-token").await;
    let home = TempDir::new().unwrap();

    let output = run_cli_with_account(&["login"], home.path(), &server.uri()).await;
    stdout_of(&["login"], &output);

    let mode = std::fs::metadata(token_file(home.path()))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[tokio::test]
async fn rejected_login_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/V3/Authenticate"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad credentials"))
        .mount(&server)
        .await;
    let home = TempDir::new().unwrap();

    let output = run_cli_with_account(&["login"], home.path(), &server.uri()).await;

    assert!(!output.status.success());
    assert!(!token_file(home.path()).exists());
}

#[tokio::test]
async fn stored_token_is_reused() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/V3/Authenticate"))
        .respond_with(ResponseTemplate::new(200).set_body_string("cli-token"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/GetLastEvent"))
        .and(query_param("boxId", "box-1"))
        .and(authed("cli-token"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    let home = TempDir::new().unwrap();

    stdout_of(
        &["login"],
        &run_cli_with_account(&["login"], home.path(), &server.uri()).await,
    );

    let args = ["last-event", "--box-id", "box-1"];
    let output = run_cli_with_account(&args, home.path(), &server.uri()).await;
    let stdout = stdout_of(&args, &output);

    assert!(stdout.contains("No events in this box"));
}

#[tokio::test]
async fn last_event_prints_preview() {
    let server = MockServer::start().await;
    mount_login(&server, "cli-token").await;
    Mock::given(method("GET"))
        .and(path("/GetLastEvent"))
        .and(authed("cli-token"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0x0a, 0x03, 0xff]))
        .mount(&server)
        .await;
    let home = TempDir::new().unwrap();
    let args = ["last-event", "--box-id", "box-1"];

    let output = run_cli_with_account(&args, home.path(), &server.uri()).await;
    let stdout = stdout_of(&args, &output);

    assert!(stdout.contains("3 bytes"));
    assert!(stdout.contains("0a 03 ff"));
}

#[tokio::test]
async fn explicit_auth_token_skips_login() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/V3/Authenticate"))
        .respond_with(ResponseTemplate::new(200).set_body_string("never"))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/GetMyUser"))
        .and(authed("given"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1, 2]))
        .mount(&server)
        .await;
    let home = TempDir::new().unwrap();
    let args = ["whoami", "--auth-token", "given"];

    let output = run_cli_with_account(&args, home.path(), &server.uri()).await;
    let stdout = stdout_of(&args, &output);

    assert!(stdout.contains("01 02"));
}

#[tokio::test]
async fn shelf_download_writes_file() {
    let server = MockServer::start().await;
    mount_login(&server, "cli-token").await;
    Mock::given(method("GET"))
        .and(path("/ShelfDownload"))
        .and(query_param("nameOnShelf", "api-file"))
        .and(authed("cli-token"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"payload".to_vec()))
        .mount(&server)
        .await;
    let home = TempDir::new().unwrap();
    let target = home.path().join("out.bin");
    let target_arg = target.to_str().unwrap();
    let args = ["shelf-download", "api-file", "-o", target_arg];

    let output = run_cli_with_account(&args, home.path(), &server.uri()).await;
    stdout_of(&args, &output);

    assert_eq!(std::fs::read(&target).unwrap(), b"payload");
}

#[tokio::test]
async fn missing_shelf_file_reports_diagnostic() {
    let server = MockServer::start().await;
    mount_login(&server, "cli-token").await;
    Mock::given(method("GET"))
        .and(path("/ShelfDownload"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let home = TempDir::new().unwrap();

    let output =
        run_cli_with_account(&["shelf-download", "api-gone"], home.path(), &server.uri()).await;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Файл на полке не найден"), "stderr: {stderr}");
}
