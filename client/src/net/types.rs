//! Shared auth DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The server's token routes deserialize the backend response with these
//! same types to pick out the access token for its cookie copy, so both
//! sides agree on the field names.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Email + password body posted to `/api/token` and `/api/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Access/refresh pair as issued by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Successful registration body. Tokens are nested under `tokens`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub tokens: TokenPair,
}

/// Token pair from a login response body, if both tokens are non-empty.
pub fn login_tokens(body: &serde_json::Value) -> Option<TokenPair> {
    serde_json::from_value::<TokenPair>(body.clone())
        .ok()
        .filter(|pair| !pair.access.is_empty() && !pair.refresh.is_empty())
}

/// Token pair from a registration response body, if present.
pub fn register_tokens(body: &serde_json::Value) -> Option<TokenPair> {
    serde_json::from_value::<RegisterResponse>(body.clone())
        .ok()
        .map(|resp| resp.tokens)
        .filter(|pair| !pair.access.is_empty() && !pair.refresh.is_empty())
}

// =============================================================================
// FORM ERRORS
// =============================================================================

/// Key under which non-field errors are collected.
pub const GENERAL_ERROR_KEY: &str = "general";

/// Errors to render on an auth form, keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub fields: BTreeMap<String, Vec<String>>,
}

impl FormErrors {
    /// Single general error.
    #[must_use]
    pub fn general(message: impl Into<String>) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(GENERAL_ERROR_KEY.to_owned(), vec![message.into()]);
        Self { fields }
    }

    /// Interpret an error response body.
    ///
    /// An object without an `error` key is a field map (`{"email": ["..."]}`
    /// or `{"email": "..."}`); anything else collapses to one general error,
    /// taken from `error` when it is a non-empty string or `fallback`
    /// otherwise.
    #[must_use]
    pub fn from_body(body: &serde_json::Value, fallback: &str) -> Self {
        if let Some(map) = body.as_object() {
            if !map.contains_key("error") && !map.is_empty() {
                let fields = map
                    .iter()
                    .map(|(field, value)| (field.clone(), messages(value)))
                    .collect();
                return Self { fields };
            }
        }

        let message = body
            .get("error")
            .and_then(serde_json::Value::as_str)
            .filter(|s| !s.is_empty())
            .unwrap_or(fallback);
        Self::general(message)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Messages for `field`, empty when the field has none.
    #[must_use]
    pub fn for_field(&self, field: &str) -> &[String] {
        self.fields.get(field).map_or(&[], Vec::as_slice)
    }
}

fn messages(value: &serde_json::Value) -> Vec<String> {
    match value {
        serde_json::Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().map_or_else(|| item.to_string(), str::to_owned))
            .collect(),
        serde_json::Value::String(s) => vec![s.clone()],
        other => vec![other.to_string()],
    }
}
