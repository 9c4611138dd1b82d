//! Auth gate middleware.
//!
//! Runs in front of every route. Paths outside the protected matcher are
//! forwarded without evaluation; gated paths are classified by
//! `services::gate` and either forwarded or redirected to the login page.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use super::cookies::cleared_access_cookie;
use crate::services::gate::{self, GateAction, GateState};
use crate::services::token::now_millis;
use crate::state::AppState;

pub async fn auth_gate(State(state): State<AppState>, jar: CookieJar, request: Request, next: Next) -> Response {
    let config = &state.config;
    let path = request.uri().path();
    if !gate::matches(&config.gate, path) {
        return next.run(request).await;
    }

    let token = jar.get(&config.gate.cookie_name).map(Cookie::value);
    let outcome = gate::classify(&config.gate, path, token, now_millis());
    match &outcome {
        GateState::TokenExpiredOrInvalid(reason) => tracing::info!(%path, %reason, "auth gate rejected token"),
        other => tracing::debug!(%path, state = ?other, "auth gate"),
    }

    match outcome.action() {
        GateAction::Forward => next.run(request).await,
        GateAction::Redirect { clear_cookie: false } => Redirect::temporary(&config.gate.login_path).into_response(),
        GateAction::Redirect { clear_cookie: true } => {
            let jar = CookieJar::new().add(cleared_access_cookie(config));
            (jar, Redirect::temporary(&config.gate.login_path)).into_response()
        }
    }
}

#[cfg(test)]
#[path = "gate_test.rs"]
mod tests;
