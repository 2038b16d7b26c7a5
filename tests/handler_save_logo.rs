mod common;

use axum_test::TestServer;
use common::{RecordingEmailSender, SVG_BYTES, StubFetcher, create_test_app};
use serde_json::json;

#[tokio::test]
async fn test_save_logo_writes_file() {
    let fetcher = StubFetcher::image("image/svg+xml", SVG_BYTES);
    let app = create_test_app(fetcher.clone(), RecordingEmailSender::accepting());
    let server = TestServer::new(app.router).unwrap();

    let response = server
        .post("/api/save-logo")
        .json(&json!({
            "logoUrl": "https://x.com/logo.svg",
            "companyName": "Canva Pro"
        }))
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], true);
    assert_eq!(json["localPath"], "/logos/canva-pro.svg");
    assert_eq!(json["originalUrl"], "https://x.com/logo.svg");
    assert_eq!(json["company"], "Canva Pro");

    let written = std::fs::read(app.logos_dir.path().join("canva-pro.svg")).unwrap();
    assert_eq!(written, SVG_BYTES);
    assert_eq!(fetcher.calls(), vec!["https://x.com/logo.svg"]);
}

#[tokio::test]
async fn test_save_logo_is_idempotent() {
    let fetcher = StubFetcher::image("image/png", b"new bytes");
    let app = create_test_app(fetcher, RecordingEmailSender::accepting());
    std::fs::write(app.logos_dir.path().join("figma.png"), b"original").unwrap();
    let server = TestServer::new(app.router).unwrap();

    for _ in 0..2 {
        let response = server
            .post("/api/save-logo")
            .json(&json!({
                "logoUrl": "https://cdn.example.com/figma.png",
                "companyName": "Figma"
            }))
            .await;

        response.assert_status_ok();
        let json = response.json::<serde_json::Value>();
        assert_eq!(json["localPath"], "/logos/figma.png");
    }

    let content = std::fs::read(app.logos_dir.path().join("figma.png")).unwrap();
    assert_eq!(content, b"original");
}

#[tokio::test]
async fn test_save_logo_defaults_to_png() {
    let fetcher = StubFetcher::image("image/png", b"png");
    let app = create_test_app(fetcher, RecordingEmailSender::accepting());
    let server = TestServer::new(app.router).unwrap();

    let response = server
        .post("/api/save-logo")
        .json(&json!({
            "logoUrl": "https://cdn.example.com/brand/notion",
            "companyName": "Notion (Team)"
        }))
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["localPath"], "/logos/notion-team.png");
}

#[tokio::test]
async fn test_save_logo_missing_fields() {
    let fetcher = StubFetcher::image("image/png", b"x");
    let app = create_test_app(fetcher.clone(), RecordingEmailSender::accepting());
    let server = TestServer::new(app.router).unwrap();

    for body in [
        json!({ "logoUrl": "https://x.com/logo.png" }),
        json!({ "companyName": "Canva" }),
        json!({ "logoUrl": "", "companyName": "Canva" }),
        json!({ "logoUrl": "https://x.com/logo.png", "companyName": "  " }),
    ] {
        let response = server.post("/api/save-logo").json(&body).await;

        response.assert_status_bad_request();
        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"], "Missing required fields");
    }

    assert!(fetcher.calls().is_empty());
}

#[tokio::test]
async fn test_save_logo_fetch_failure() {
    let app = create_test_app(StubFetcher::status(404), RecordingEmailSender::accepting());
    let server = TestServer::new(app.router).unwrap();

    let response = server
        .post("/api/save-logo")
        .json(&json!({
            "logoUrl": "https://x.com/missing.png",
            "companyName": "Ghost"
        }))
        .expect_failure()
        .await;

    response.assert_status_internal_server_error();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Failed to save logo");
    assert!(json["details"].as_str().unwrap().contains("404"));
    assert!(!app.logos_dir.path().join("ghost.png").exists());
}

#[tokio::test]
async fn test_saved_logo_is_served_statically() {
    let fetcher = StubFetcher::image("image/svg+xml", SVG_BYTES);
    let app = create_test_app(fetcher, RecordingEmailSender::accepting());
    let server = TestServer::new(app.router).unwrap();

    server
        .post("/api/save-logo")
        .json(&json!({
            "logoUrl": "https://x.com/logo.svg",
            "companyName": "Canva Pro"
        }))
        .await
        .assert_status_ok();

    let response = server.get("/logos/canva-pro.svg").await;

    response.assert_status_ok();
    assert_eq!(response.as_bytes().as_ref(), SVG_BYTES);
}
