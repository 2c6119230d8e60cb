//! Checks that relayed credentials never reach the log output.

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use mockito::{Matcher, Server};
use serde_json::json;
use std::io;
use std::sync::{Arc, Mutex};
use universal_ssl_relay::domain::clients::ZoneSettingsClient;
use universal_ssl_relay::infrastructure::cloudflare::CloudflareClient;
use universal_ssl_relay::routes::app_router;
use universal_ssl_relay::web::Locale;

const API_KEY: &str = "c2547eb745079dac9320b638f5e225cf483cc5cfdda41";

/// Shared in-memory sink for formatted log lines.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture_logs() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(move || writer.clone())
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (logs, guard)
}

fn server_for(client: CloudflareClient) -> TestServer {
    let client: Arc<dyn ZoneSettingsClient> = Arc::new(client);
    TestServer::new(app_router(common::create_test_state(client, Locale::En))).unwrap()
}

#[tokio::test]
async fn test_relayed_request_does_not_log_api_key() {
    let mut upstream = Server::new_async().await;
    let mock = upstream
        .mock("PATCH", Matcher::Any)
        .match_header("x-auth-key", API_KEY)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "success": true, "result": { "enabled": true } }).to_string())
        .expect(1)
        .create_async()
        .await;

    let (logs, _guard) = capture_logs();
    let app = server_for(CloudflareClient::new(&upstream.url()).unwrap());

    let response = app
        .post("/api/add-ssl")
        .add_header("x-auth-key", API_KEY)
        .json(&common::valid_payload())
        .await;

    response.assert_status_ok();
    mock.assert_async().await;

    let output = logs.contents();
    assert!(output.contains("/api/add-ssl"), "{output}");
    assert!(output.contains("status=200"), "{output}");
    assert!(!output.contains(API_KEY), "{output}");
}

#[tokio::test]
async fn test_failed_relay_does_not_log_api_key() {
    let (logs, _guard) = capture_logs();
    // Port 9 (discard) is not expected to accept HTTP connections locally.
    let app = server_for(CloudflareClient::new("http://127.0.0.1:9").unwrap());

    let response = app
        .post("/api/add-ssl")
        .json(&common::valid_payload())
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let output = logs.contents();
    assert!(output.contains("Relay request failed"), "{output}");
    assert!(!output.contains(API_KEY), "{output}");
}
