//! Access-token cookie construction.

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

use crate::config::ServerConfig;

/// Cookie carrying the access token for the auth gate. Session-scoped; the
/// gate enforces expiry from the token itself.
pub fn access_cookie(config: &ServerConfig, token: String) -> Cookie<'static> {
    Cookie::build((config.gate.cookie_name.clone(), token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.cookie_secure)
        .build()
}

/// Removal cookie for the access token.
pub fn cleared_access_cookie(config: &ServerConfig) -> Cookie<'static> {
    Cookie::build((config.gate.cookie_name.clone(), String::new()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.cookie_secure)
        .max_age(Duration::ZERO)
        .build()
}
