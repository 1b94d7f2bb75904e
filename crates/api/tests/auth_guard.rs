use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use personachat_common::{encrypt, get_current_timestamp};
use personachat_service_api::{character_routes, chat_routes, AppState};

const TEST_SALT: &str = "auth-guard-test-salt";

// Unconnected state: any handler that reaches a backend would panic, so a
// clean 4xx also proves validation fired before any database or provider
// call.
fn test_app() -> Router {
    std::env::set_var("SECRET_SALT", TEST_SALT);
    Router::new()
        .merge(chat_routes())
        .merge(character_routes())
        .with_state(AppState::default())
}

fn token_issued_at(user_id: &str, timestamp: i64) -> String {
    let payload = json!({
        "user_id": user_id,
        "timestamp": timestamp,
        "origin": "test"
    });
    encrypt(&payload.to_string(), TEST_SALT).unwrap()
}

fn fresh_token(user_id: &str) -> String {
    token_issued_at(user_id, get_current_timestamp())
}

fn request(method: &str, uri: &str, auth: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = auth {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    let body = match body {
        Some(value) => Body::from(value.to_string()),
        None => Body::empty(),
    };
    builder.body(body).unwrap()
}

async fn response_message(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    body["message"].as_str().unwrap_or_default().to_string()
}

#[tokio::test]
async fn every_protected_route_rejects_missing_identity() {
    let routes = [
        ("POST", "/chat/completion"),
        ("POST", "/chat/history"),
        ("GET", "/chat/history"),
        ("POST", "/character/config"),
        ("GET", "/character/config"),
    ];

    for (method, uri) in routes {
        let response = test_app()
            .oneshot(request(method, uri, None, Some(json!({}))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{} {}", method, uri);
    }
}

#[tokio::test]
async fn garbled_bearer_token_is_rejected() {
    let response = test_app()
        .oneshot(request("GET", "/character/config", Some("not-a-real-token"), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn non_bearer_scheme_is_rejected() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/character/config")
                .header("authorization", "Basic dXNlcjpwYXNz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn stale_token_is_rejected() {
    let token = token_issued_at("u1", get_current_timestamp() - 120);
    let response = test_app()
        .oneshot(request("GET", "/character/config", Some(&token), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn empty_message_list_is_invalid() {
    let token = fresh_token("u1");
    let response = test_app()
        .oneshot(request(
            "POST",
            "/chat/completion",
            Some(&token),
            Some(json!({ "messages": [], "maxTokens": 256 })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn token_ceiling_is_enforced() {
    let token = fresh_token("u1");
    let response = test_app()
        .oneshot(request(
            "POST",
            "/chat/completion",
            Some(&token),
            Some(json!({
                "messages": [{ "role": "user", "content": "hi" }],
                "maxTokens": 4097
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response_message(response).await.contains("maxTokens"));
}

#[tokio::test]
async fn blank_character_name_is_invalid() {
    let token = fresh_token("u1");
    for payload in [json!({ "name": "   " }), json!({ "age": "23" })] {
        let response = test_app()
            .oneshot(request("POST", "/character/config", Some(&token), Some(payload)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response_message(response).await.contains("name"));
    }
}

#[tokio::test]
async fn empty_history_flush_is_invalid() {
    let token = fresh_token("u1");
    let response = test_app()
        .oneshot(request(
            "POST",
            "/chat/history",
            Some(&token),
            Some(json!({ "history": [] })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
