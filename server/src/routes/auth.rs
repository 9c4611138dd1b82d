//! Auth routes: token issuance and registration, relayed to the backend.
//!
//! Both routes pass the backend's JSON through and, on success, set the
//! `accessToken` cookie that the auth gate reads. The browser keeps its own
//! copy of the pair in local storage; the two are never reconciled.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use client::net::types::{Credentials, login_tokens, register_tokens};
use serde_json::json;

use super::cookies::access_cookie;
use crate::state::AppState;

const BACKEND_TOKEN_ENDPOINT: &str = "/api/token/";
const BACKEND_REGISTER_ENDPOINT: &str = "/api/register/";

fn error_body(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// Reply 200 with `body`, setting the access cookie when a token is present.
fn success_with_cookie(state: &AppState, access: Option<String>, body: serde_json::Value) -> Response {
    match access {
        Some(token) => {
            let jar = CookieJar::new().add(access_cookie(&state.config, token));
            (jar, Json(body)).into_response()
        }
        None => {
            tracing::warn!("backend success response carried no access token");
            Json(body).into_response()
        }
    }
}

/// `POST /api/token`: exchange email + password for a token pair.
pub async fn token(State(state): State<AppState>, Json(credentials): Json<Credentials>) -> Response {
    let resp = match state.backend.post_json(BACKEND_TOKEN_ENDPOINT, &credentials).await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::error!(error = %e, "login relay failed");
            return error_body(StatusCode::INTERNAL_SERVER_ERROR, "Failed to authenticate user");
        }
    };

    if !resp.status.is_success() {
        let detail = resp
            .body
            .get("detail")
            .and_then(serde_json::Value::as_str)
            .filter(|d| !d.is_empty())
            .unwrap_or("Login failed");
        tracing::info!(status = resp.status.as_u16(), "login rejected by backend");
        return error_body(resp.status, detail);
    }

    let access = login_tokens(&resp.body).map(|pair| pair.access);
    success_with_cookie(&state, access, resp.body)
}

/// `POST /api/register`: create an account; the backend issues tokens for it.
pub async fn register(State(state): State<AppState>, Json(credentials): Json<Credentials>) -> Response {
    let resp = match state.backend.post_json(BACKEND_REGISTER_ENDPOINT, &credentials).await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::error!(error = %e, "registration relay failed");
            return error_body(StatusCode::INTERNAL_SERVER_ERROR, "Failed to register user");
        }
    };

    if !resp.status.is_success() {
        tracing::info!(status = resp.status.as_u16(), "registration rejected by backend");
        return (resp.status, Json(resp.body)).into_response();
    }

    let access = register_tokens(&resp.body).map(|pair| pair.access);
    success_with_cookie(&state, access, resp.body)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
