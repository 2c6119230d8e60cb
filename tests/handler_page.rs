mod common;

use axum::http::Method;
use axum_test::TestServer;
use common::StubClient;
use serde_json::json;
use universal_ssl_relay::routes::app_router;
use universal_ssl_relay::web::Locale;

fn server(locale: Locale) -> TestServer {
    let client = StubClient::replying(200, json!({}));
    TestServer::new(app_router(common::create_test_state(client, locale))).unwrap()
}

#[tokio::test]
async fn test_page_is_html_for_every_path() {
    let server = server(Locale::En);

    for path in ["/", "/index.html", "/api", "/api/add-ssl/extra", "/anything?x=1"] {
        let response = server.get(path).await;

        response.assert_status_ok();
        let content_type = response.header("content-type");
        assert!(
            content_type.to_str().unwrap().starts_with("text/html"),
            "{path}"
        );
    }
}

#[tokio::test]
async fn test_page_is_served_for_other_methods() {
    let server = server(Locale::En);

    for method in [Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
        let response = server.method(method.clone(), "/").await;
        response.assert_status_ok();
        assert!(response.text().contains("ssl-form"), "{method}");
    }
}

#[tokio::test]
async fn test_page_is_constant_across_paths() {
    let server = server(Locale::En);

    let root = server.get("/").await.text();
    let other = server.get("/some/where").await.text();

    assert_eq!(root, other);
}

#[tokio::test]
async fn test_english_locale() {
    let html = server(Locale::En).get("/").await.text();

    assert!(html.contains("<title>IP6.ARPA Automatically add SSL certificate to domain name</title>"));
    assert!(html.contains("Global API Key (API Key)"));
    assert!(!html.contains("Kunci API Global"));
}

#[tokio::test]
async fn test_indonesian_locale() {
    let html = server(Locale::Id).get("/").await.text();

    assert!(html.contains("<title>Tambahkan sertifikat SSL secara otomatis ke nama domain</title>"));
    assert!(html.contains("Kunci API Global (API Key)"));
    assert!(html.contains("Perhatian: Kunci API Anda hanya digunakan untuk permintaan ini"));
    assert!(!html.contains("Global API Key (API Key)"));
}
