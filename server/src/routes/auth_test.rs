use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, header};
use axum::routing::post;
use serde_json::Value;
use tower::ServiceExt;

use super::*;
use crate::routes::api_routes;
use crate::state::test_helpers::{jwt_expiring_in, test_app_state};

const TAKEN_EMAIL: &str = "taken@example.com";
const GOOD_PASSWORD: &str = "TestPassword123!";

// =============================================================================
// STUB BACKEND
// =============================================================================

async fn stub_token(Json(creds): Json<Credentials>) -> Response {
    if creds.password == GOOD_PASSWORD {
        Json(json!({ "access": jwt_expiring_in(300), "refresh": "refresh-token" })).into_response()
    } else if creds.password == "no-detail" {
        (StatusCode::UNAUTHORIZED, Json(json!({}))).into_response()
    } else if creds.password == "html" {
        (StatusCode::BAD_GATEWAY, "<html>oops</html>").into_response()
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({ "detail": "No active account found with the given credentials" })))
            .into_response()
    }
}

async fn stub_register(Json(creds): Json<Credentials>) -> Response {
    if creds.email == TAKEN_EMAIL {
        return (StatusCode::BAD_REQUEST, Json(json!({ "email": ["user with this email already exists."] })))
            .into_response();
    }
    let body = json!({
        "message": "User registered successfully",
        "email": creds.email,
        "tokens": { "access": jwt_expiring_in(300), "refresh": "refresh-token" }
    });
    (StatusCode::CREATED, Json(body)).into_response()
}

/// Serve the stub backend on an ephemeral port and return its base URL.
async fn spawn_backend() -> String {
    let router = Router::new()
        .route("/api/token/", post(stub_token))
        .route("/api/register/", post(stub_register));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind stub backend");
    let addr = listener.local_addr().expect("stub backend addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    format!("http://{addr}")
}

async fn post_json(base_url: &str, path: &str, body: &Value) -> (StatusCode, Vec<String>, Value) {
    let app = api_routes(test_app_state(base_url));
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let resp = app.oneshot(request).await.unwrap();
    let status = resp.status();
    let cookies = resp
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_owned())
        .collect();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, cookies, json)
}

// =============================================================================
// /api/token
// =============================================================================

#[tokio::test]
async fn token_success_returns_pair_and_sets_cookie() {
    let base = spawn_backend().await;
    let (status, cookies, body) =
        post_json(&base, "/api/token", &json!({ "email": "a@b.com", "password": GOOD_PASSWORD })).await;

    assert_eq!(status, StatusCode::OK);
    let access = body["access"].as_str().expect("access token");
    assert_eq!(body["refresh"], "refresh-token");
    assert_eq!(cookies.len(), 1);
    assert!(cookies[0].starts_with(&format!("accessToken={access}")));
    assert!(cookies[0].contains("HttpOnly"));
    assert!(cookies[0].contains("Path=/"));
}

#[tokio::test]
async fn token_rejection_maps_detail_to_error() {
    let base = spawn_backend().await;
    let (status, cookies, body) = post_json(&base, "/api/token", &json!({ "email": "a@b.com", "password": "wrong" })).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "No active account found with the given credentials" }));
    assert!(cookies.is_empty());
}

#[tokio::test]
async fn token_rejection_without_detail_uses_fallback() {
    let base = spawn_backend().await;
    let (status, _, body) = post_json(&base, "/api/token", &json!({ "email": "a@b.com", "password": "no-detail" })).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "Login failed" }));
}

#[tokio::test]
async fn token_non_json_backend_reply_is_server_error() {
    let base = spawn_backend().await;
    let (status, cookies, body) = post_json(&base, "/api/token", &json!({ "email": "a@b.com", "password": "html" })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to authenticate user" }));
    assert!(cookies.is_empty());
}

#[tokio::test]
async fn token_unreachable_backend_is_server_error() {
    let (status, _, body) =
        post_json("http://127.0.0.1:1", "/api/token", &json!({ "email": "a@b.com", "password": GOOD_PASSWORD })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to authenticate user" }));
}

// =============================================================================
// /api/register
// =============================================================================

#[tokio::test]
async fn register_success_returns_ok_and_sets_cookie() {
    let base = spawn_backend().await;
    let (status, cookies, body) =
        post_json(&base, "/api/register", &json!({ "email": "new@example.com", "password": GOOD_PASSWORD })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "new@example.com");
    let access = body["tokens"]["access"].as_str().expect("nested access token");
    assert_eq!(cookies.len(), 1);
    assert!(cookies[0].starts_with(&format!("accessToken={access}")));
}

#[tokio::test]
async fn register_rejection_passes_field_errors_through() {
    let base = spawn_backend().await;
    let (status, cookies, body) =
        post_json(&base, "/api/register", &json!({ "email": TAKEN_EMAIL, "password": GOOD_PASSWORD })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "email": ["user with this email already exists."] }));
    assert!(cookies.is_empty());
}

#[tokio::test]
async fn register_unreachable_backend_is_server_error() {
    let (status, _, body) =
        post_json("http://127.0.0.1:1", "/api/register", &json!({ "email": "n@example.com", "password": "pw" })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to register user" }));
}

// =============================================================================
// Issued cookie feeds the gate
// =============================================================================

#[tokio::test]
async fn issued_cookie_passes_the_gate() {
    use crate::services::gate::{GateState, classify};
    use crate::services::token::now_millis;

    let base = spawn_backend().await;
    let (_, _, body) = post_json(&base, "/api/token", &json!({ "email": "a@b.com", "password": GOOD_PASSWORD })).await;
    let access = body["access"].as_str().unwrap();
    let config = crate::state::test_helpers::test_config(&base);
    assert_eq!(classify(&config.gate, "/dashboard", Some(access), now_millis()), GateState::TokenValid);
}
