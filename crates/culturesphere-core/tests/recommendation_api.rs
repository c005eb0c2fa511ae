use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use culturesphere_core::controller::assistant::FALLBACK_REPLY;
use culturesphere_core::controller::domain::FAILURE_MESSAGE;
use culturesphere_core::{
    AssistantController, ClientError, Domain, DomainController, InteractionState,
    RecommendationClient, Recommender,
};

/// Serve `router` on an ephemeral port and return the API base URL.
async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/api")
}

/// A base URL nothing is listening on.
async fn dead_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api")
}

/// Answer one connection with `raw` bytes and hang up, whatever was asked.
async fn spawn_raw_stub(raw: &'static [u8]) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        let _ = socket.write_all(raw).await;
        let _ = socket.shutdown().await;
    });
    format!("http://{addr}/api")
}

fn replying(body: Value) -> Router {
    Router::new().route(
        "/api/recommendations",
        post(move || {
            let body = body.clone();
            async move { Json(body) }
        }),
    )
}

fn failing(status: StatusCode, body: &'static str) -> Router {
    Router::new().route(
        "/api/recommendations",
        post(move || async move { (status, body) }),
    )
}

#[tokio::test]
async fn test_send_returns_recommendations_field_verbatim() {
    let text = "Try: Kamasi Washington, minimalist loft spaces...";
    let base = spawn_stub(replying(json!({ "recommendations": text }))).await;
    let client = RecommendationClient::new(&base);

    let result = client.send("I love jazz and minimalism", Domain::Music).await;
    assert_eq!(result, Ok(text.to_string()));
}

#[tokio::test]
async fn test_request_body_reaches_server_unchanged() {
    let router = Router::new().route(
        "/api/recommendations",
        post(|Json(body): Json<Value>| async move {
            Json(json!({
                "recommendations": format!("{}|{}", body["userInput"].as_str().unwrap_or(""), body["domain"].as_str().unwrap_or(""))
            }))
        }),
    );
    let base = spawn_stub(router).await;
    let client = RecommendationClient::new(&format!("{base}/"));

    let echoed = client.send_general("  line one\nline two ").await.unwrap();
    assert_eq!(echoed, "  line one\nline two |general");
}

#[tokio::test]
async fn test_server_error_detail_from_body() {
    let base = spawn_stub(failing(
        StatusCode::INTERNAL_SERVER_ERROR,
        r#"{"error": "rate limited"}"#,
    ))
    .await;
    let client = RecommendationClient::new(&base);

    let err = client.send("anything", Domain::Dining).await.unwrap_err();
    assert_eq!(err, ClientError::ServerError("rate limited".to_string()));
}

#[tokio::test]
async fn test_server_error_detail_from_status_line() {
    let base = spawn_stub(failing(StatusCode::SERVICE_UNAVAILABLE, "down for maintenance")).await;
    let client = RecommendationClient::new(&base);

    let err = client.send("anything", Domain::Travel).await.unwrap_err();
    assert_eq!(err, ClientError::ServerError("Service Unavailable".to_string()));
}

#[tokio::test]
async fn test_truncated_error_body_is_still_server_error() {
    let base = spawn_raw_stub(
        b"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 100\r\n\r\n{\"err",
    )
    .await;
    let client = RecommendationClient::new(&base);

    let err = client.send("x", Domain::Music).await.unwrap_err();
    assert_eq!(err, ClientError::ServerError("Internal Server Error".to_string()));
}

#[tokio::test]
async fn test_truncated_health_error_is_server_error() {
    let base = spawn_raw_stub(
        b"HTTP/1.1 503 Service Unavailable\r\nContent-Length: 64\r\n\r\n{",
    )
    .await;
    let client = RecommendationClient::new(&base);

    let err = client.health().await.unwrap_err();
    assert_eq!(err, ClientError::ServerError("Service Unavailable".to_string()));
}

#[tokio::test]
async fn test_missing_field_is_unknown() {
    let base = spawn_stub(replying(json!({ "recommendation": "old singular field" }))).await;
    let client = RecommendationClient::new(&base);

    let err = client.send("anything", Domain::Fashion).await.unwrap_err();
    assert!(matches!(err, ClientError::Unknown(_)), "got {err:?}");
}

#[tokio::test]
async fn test_non_json_success_is_unknown() {
    let router = Router::new().route("/api/recommendations", post(|| async { "plain text" }));
    let base = spawn_stub(router).await;
    let client = RecommendationClient::new(&base);

    let err = client.send("anything", Domain::Learning).await.unwrap_err();
    assert!(matches!(err, ClientError::Unknown(_)), "got {err:?}");
}

#[tokio::test]
async fn test_connection_refused_is_unreachable() {
    let client = RecommendationClient::new(&dead_url().await);

    let err = client.send("anything", Domain::Wellness).await.unwrap_err();
    assert!(matches!(err, ClientError::Unreachable(_)), "got {err:?}");
}

#[tokio::test]
async fn test_health_probe() {
    let router = Router::new().route(
        "/api/health",
        get(|| async { Json(json!({ "status": "ok", "timestamp": "2026-10-18T12:00:00" })) }),
    );
    let base = spawn_stub(router).await;
    let client = RecommendationClient::new(&base);

    let health = client.health().await.unwrap();
    assert!(health.is_ok());

    let offline = RecommendationClient::new(&dead_url().await);
    assert!(matches!(offline.health().await, Err(ClientError::Unreachable(_))));
}

#[tokio::test]
async fn test_domain_controller_against_failing_server() {
    let base = spawn_stub(failing(
        StatusCode::INTERNAL_SERVER_ERROR,
        r#"{"error": "rate limited"}"#,
    ))
    .await;
    let client: Arc<dyn Recommender> = Arc::new(RecommendationClient::new(&base));
    let mut controller = DomainController::new(Domain::Music, client);

    assert!(controller.submit("I love jazz"));
    controller.wait().await;

    assert_eq!(
        controller.state(),
        &InteractionState::Failure(ClientError::ServerError("rate limited".to_string()))
    );
    assert_eq!(controller.failure_message(), Some(FAILURE_MESSAGE));
}

#[tokio::test]
async fn test_domain_controller_with_backend_down() {
    let client: Arc<dyn Recommender> = Arc::new(RecommendationClient::new(&dead_url().await));
    let mut controller = DomainController::new(Domain::Travel, client);

    controller.submit("Amsterdam");
    controller.wait().await;

    assert_eq!(controller.failure_message(), Some(FAILURE_MESSAGE));
}

#[tokio::test]
async fn test_assistant_with_backend_down_appends_fallback() {
    let client: Arc<dyn Recommender> = Arc::new(RecommendationClient::new(&dead_url().await));
    let mut assistant = AssistantController::new(client);

    assert!(assistant.send_message("What can you do?"));
    assistant.wait().await;

    let messages = assistant.messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[2].text, FALLBACK_REPLY);
}

#[tokio::test]
async fn test_assistant_sends_assistant_domain() {
    let router = Router::new().route(
        "/api/recommendations",
        post(|Json(body): Json<Value>| async move {
            Json(json!({ "recommendations": body["domain"] }))
        }),
    );
    let base = spawn_stub(router).await;
    let client: Arc<dyn Recommender> = Arc::new(RecommendationClient::new(&base));
    let mut assistant = AssistantController::new(client);

    assistant.send_message("hi");
    assistant.wait().await;

    assert_eq!(assistant.messages()[2].text, "assistant");
}
