//! REST API helpers for the auth routes.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is folded into `FormErrors` so pages render one shape of
//! error regardless of whether the backend, the transport or the body was
//! at fault.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Credentials, FormErrors, TokenPair, login_tokens, register_tokens};

pub const TOKEN_ENDPOINT: &str = "/api/token";
pub const REGISTER_ENDPOINT: &str = "/api/register";

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
const NO_TOKENS_MESSAGE: &str = "No tokens received";

/// Which auth form a response belongs to. Drives token extraction and the
/// fallback error text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthFlow {
    Login,
    Register,
}

impl AuthFlow {
    #[must_use]
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Login => TOKEN_ENDPOINT,
            Self::Register => REGISTER_ENDPOINT,
        }
    }

    #[must_use]
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Login => "Login failed",
            Self::Register => "Registration failed",
        }
    }

    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    fn tokens(self, body: &serde_json::Value) -> Option<TokenPair> {
        match self {
            Self::Login => login_tokens(body),
            Self::Register => register_tokens(body),
        }
    }
}

/// Turn a decoded response into tokens or form errors.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn auth_outcome(flow: AuthFlow, ok: bool, body: &serde_json::Value) -> Result<TokenPair, FormErrors> {
    if !ok {
        return Err(FormErrors::from_body(body, flow.failure_message()));
    }
    flow.tokens(body).ok_or_else(|| FormErrors::general(NO_TOKENS_MESSAGE))
}

/// Post credentials for `flow` and return the issued token pair.
///
/// # Errors
///
/// Returns field or general errors for rejected credentials, transport
/// failures, and successful responses that carry no tokens.
pub async fn authenticate(flow: AuthFlow, credentials: &Credentials) -> Result<TokenPair, FormErrors> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(flow.endpoint())
            .json(credentials)
            .map_err(|e| FormErrors::general(e.to_string()))?
            .send()
            .await
            .map_err(|e| FormErrors::general(e.to_string()))?;
        let body: serde_json::Value = resp.json().await.map_err(|e| FormErrors::general(e.to_string()))?;
        let outcome = auth_outcome(flow, resp.ok(), &body);
        if let Err(errors) = &outcome {
            log::warn!("{} request rejected: status={} errors={errors:?}", flow.endpoint(), resp.status());
        }
        outcome
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (flow, credentials);
        Err(FormErrors::general("not available on server"))
    }
}
