//! Access-token inspection without verification.
//!
//! DESIGN
//! ======
//! Only the `exp` claim of the payload is read. The signature is never
//! checked: the backend verifies tokens on every API call, so this decode
//! exists to bounce clearly-stale sessions before a protected page renders.
//! It is not a security boundary.

use base64::Engine;
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum TokenError {
    /// Not a three-part `header.payload.signature` string.
    #[error("expected 3 dot-separated segments, found {0}")]
    SegmentCount(usize),

    /// Payload segment is not base64 in either alphabet.
    #[error("payload is not valid base64")]
    Base64,

    /// Payload bytes are not a JSON document.
    #[error("payload is not valid JSON: {0}")]
    Json(String),

    /// Payload has no numeric `exp`.
    #[error("payload has no numeric exp claim")]
    MissingExp,
}

/// Claims consulted by the auth gate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Claims {
    /// Expiry, Unix seconds.
    pub exp: f64,
}

impl Claims {
    /// Expired iff `now_ms > exp * 1000`. A token is still valid at the
    /// exact expiry instant.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        now_ms as f64 > self.exp * 1000.0
    }
}

/// Decode the payload of a compact JWT and read `exp`.
///
/// # Errors
///
/// Returns the first decode step that failed.
pub fn decode_claims(token: &str) -> Result<Claims, TokenError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(TokenError::SegmentCount(segments.len()));
    }

    let payload = decode_segment(segments[1])?;
    let value: serde_json::Value = serde_json::from_slice(&payload).map_err(|e| TokenError::Json(e.to_string()))?;
    let exp = value.get("exp").and_then(serde_json::Value::as_f64).ok_or(TokenError::MissingExp)?;

    Ok(Claims { exp })
}

/// JWTs use the URL-safe alphabet without padding; standard-alphabet and
/// padded payloads are accepted too.
fn decode_segment(segment: &str) -> Result<Vec<u8>, TokenError> {
    let trimmed = segment.trim_end_matches('=');
    URL_SAFE_NO_PAD
        .decode(trimmed)
        .or_else(|_| STANDARD_NO_PAD.decode(trimmed))
        .map_err(|_| TokenError::Base64)
}

/// Current wall-clock time in Unix milliseconds.
#[must_use]
pub fn now_millis() -> i64 {
    let nanos = time::OffsetDateTime::now_utc().unix_timestamp_nanos();
    i64::try_from(nanos / 1_000_000).unwrap_or(i64::MAX)
}

#[cfg(test)]
#[path = "token_test.rs"]
mod tests;
