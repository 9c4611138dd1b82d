//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! API routes and Leptos SSR pages share one Axum router. The auth gate is
//! layered over the whole router and decides per path whether it applies,
//! so pages are checked before any page code renders.

pub mod auth;
pub mod cookies;
pub mod gate;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Token and registration relays plus health check.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/token", post(auth::token))
        .route("/api/register", post(auth::register))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Wrap `router` with the auth gate.
pub fn with_auth_gate(router: Router, state: AppState) -> Router {
    router.layer(middleware::from_fn_with_state(state, gate::auth_gate))
}

/// Full application: API routes + Leptos SSR pages + static assets, behind
/// the auth gate.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded.
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let router = api_routes(state.clone())
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")));

    Ok(with_auth_gate(router, state).layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
