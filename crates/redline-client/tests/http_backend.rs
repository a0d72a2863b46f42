use axum::{
    Json, Router,
    extract::Multipart,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::post,
};
use redline_client::{HttpBackend, RedactionBackend};
use redline_config::ServerConfig;
use redline_core::{Action, Error, RedactionForm, UpdateRequest};
use serde_json::json;
use tokio::net::TcpListener;

async fn collect_fields(mut multipart: Multipart) -> Vec<(String, String)> {
    let mut fields = Vec::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let value = field.text().await.unwrap();
        fields.push((name, value));
    }
    fields
}

async fn preview(multipart: Multipart) -> Json<serde_json::Value> {
    let fields = collect_fields(multipart).await;
    if fields.iter().any(|(_, v)| v == "SHRED") {
        return Json(json!({ "error": "bad input" }));
    }
    let lines: Vec<String> = fields.iter().map(|(n, v)| format!("{}={}", n, v)).collect();
    Json(json!({ "preview": lines.join("\n") }))
}

async fn update(Json(request): Json<UpdateRequest>) -> Json<serde_json::Value> {
    let success = request.action.parse::<Action>().is_ok();
    Json(json!({ "success": success }))
}

async fn search(multipart: Multipart) -> Json<serde_json::Value> {
    let fields = collect_fields(multipart).await;
    let query = fields
        .into_iter()
        .find(|(n, _)| n == "query")
        .map(|(_, v)| v)
        .unwrap_or_default();
    Json(json!({
        "success": true,
        "results": [{ "paragraph": 2, "context": format!("...{}...", query) }]
    }))
}

async fn broken() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, Html("<h1>Internal Server Error</h1>"))
}

async fn spawn_server() -> ServerConfig {
    let app = Router::new()
        .route("/preview", post(preview))
        .route("/update_redaction", post(update))
        .route("/search", post(search))
        .route("/broken", post(broken));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    ServerConfig {
        base_url: format!("http://{}", addr),
        ..ServerConfig::default()
    }
}

#[tokio::test]
async fn test_preview_sends_every_field() {
    let backend = HttpBackend::new(spawn_server().await).unwrap();

    let mut form = RedactionForm::new();
    form.push("redact_Alice", "MASK");
    form.push("custom_Alice", "");

    let response = backend.preview(&form).await.unwrap();
    assert_eq!(
        response.into_result().unwrap(),
        "redact_Alice=MASK\ncustom_Alice="
    );
}

#[tokio::test]
async fn test_preview_error_payload() {
    let backend = HttpBackend::new(spawn_server().await).unwrap();

    let mut form = RedactionForm::new();
    form.push("redact_Alice", "SHRED");

    let response = backend.preview(&form).await.unwrap();
    assert_eq!(response.error.as_deref(), Some("bad input"));
}

#[tokio::test]
async fn test_update_posts_json() {
    let backend = HttpBackend::new(spawn_server().await).unwrap();

    let ok = backend
        .update_redaction(&UpdateRequest::new("Alice", "mask"))
        .await
        .unwrap();
    assert!(ok.success);

    let rejected = backend
        .update_redaction(&UpdateRequest::new("Alice", "shred"))
        .await
        .unwrap();
    assert!(!rejected.success);
}

#[tokio::test]
async fn test_search_results() {
    let backend = HttpBackend::new(spawn_server().await).unwrap();

    let hits = backend.search("Acme").await.unwrap().into_result().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].paragraph, 2);
    assert_eq!(hits[0].context, "...Acme...");
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let mut server = spawn_server().await;
    server.preview_path = "/broken".to_string();
    let backend = HttpBackend::new(server).unwrap();

    let err = backend.preview(&RedactionForm::new()).await.unwrap_err();
    assert!(matches!(err, Error::Decode(ref m) if m.contains("HTTP 500")));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let backend = HttpBackend::new(ServerConfig {
        base_url: format!("http://{}", addr),
        ..ServerConfig::default()
    })
    .unwrap();

    let err = backend
        .update_redaction(&UpdateRequest::new("Alice", "mask"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}
