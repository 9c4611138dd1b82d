//! Auth gate classification for page navigations.
//!
//! DESIGN
//! ======
//! Pure and stateless: every request is classified from scratch from its
//! path, the `accessToken` cookie value and the current time. The axum
//! middleware in `routes::gate` turns the outcome into a response.
//!
//! Two checks decide whether a path is gated. `matches` mirrors the route
//! matcher (`/dashboard/:path*` and friends) and decides whether the gate
//! runs at all; inside the gate, `classify` applies the plain prefix test.

use crate::config::GateConfig;
use crate::services::token::{TokenError, decode_claims};

/// Per-request gate state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateState {
    PublicPath,
    NoToken,
    TokenExpiredOrInvalid(InvalidReason),
    TokenValid,
}

/// Why a present token was rejected. Logged, never shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    Expired,
    Malformed(TokenError),
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Expired => f.write_str("expired"),
            Self::Malformed(e) => write!(f, "malformed: {e}"),
        }
    }
}

/// What the middleware does with the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateAction {
    /// Pass through unchanged.
    Forward,
    /// Redirect to the login path, optionally deleting the token cookie.
    Redirect { clear_cookie: bool },
}

impl GateState {
    #[must_use]
    pub fn action(&self) -> GateAction {
        match self {
            Self::PublicPath | Self::TokenValid => GateAction::Forward,
            Self::NoToken => GateAction::Redirect { clear_cookie: false },
            Self::TokenExpiredOrInvalid(_) => GateAction::Redirect { clear_cookie: true },
        }
    }
}

/// Matcher: `prefix` itself or anything below `prefix/`.
#[must_use]
pub fn matches(config: &GateConfig, path: &str) -> bool {
    config.protected_prefixes.iter().any(|prefix| {
        path.strip_prefix(prefix.as_str())
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    })
}

/// Classify one navigation. An empty cookie value counts as no token.
#[must_use]
pub fn classify(config: &GateConfig, path: &str, token: Option<&str>, now_ms: i64) -> GateState {
    if !config.protected_prefixes.iter().any(|prefix| path.starts_with(prefix.as_str())) {
        return GateState::PublicPath;
    }

    let Some(token) = token.filter(|t| !t.is_empty()) else {
        return GateState::NoToken;
    };

    match decode_claims(token) {
        Err(e) => GateState::TokenExpiredOrInvalid(InvalidReason::Malformed(e)),
        Ok(claims) if claims.is_expired_at(now_ms) => GateState::TokenExpiredOrInvalid(InvalidReason::Expired),
        Ok(_) => GateState::TokenValid,
    }
}

#[cfg(test)]
#[path = "gate_test.rs"]
mod tests;
