//! HTTP client for the notes backend API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token and register routes forward credentials here. The backend owns
//! users and signs tokens; this server only relays its responses and keeps a
//! cookie copy of the access token.

use std::time::Duration;

use axum::http::StatusCode;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    #[error("backend request failed: {0}")]
    Request(String),

    #[error("backend response parse failed: {0}")]
    Parse(String),
}

/// Status and JSON body of a backend response.
#[derive(Debug, Clone)]
pub struct BackendResponse {
    pub status: StatusCode,
    pub body: serde_json::Value,
}

#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// # Errors
    ///
    /// Returns an error if the underlying `reqwest` client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BackendError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    /// Absolute URL for a backend endpoint path.
    #[must_use]
    pub fn api_url(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{endpoint}", self.base_url)
        } else {
            format!("{}/{endpoint}", self.base_url)
        }
    }

    /// POST `body` as JSON and decode the JSON reply, whatever its status.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-JSON reply.
    pub async fn post_json<T: Serialize + ?Sized>(&self, endpoint: &str, body: &T) -> Result<BackendResponse, BackendError> {
        let url = self.api_url(endpoint);
        let resp = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .json::<serde_json::Value>()
            .await
            .map_err(|e| BackendError::Parse(e.to_string()))?;

        tracing::debug!(%url, status = status.as_u16(), "backend responded");
        Ok(BackendResponse { status, body })
    }
}

#[cfg(test)]
#[path = "backend_test.rs"]
mod tests;
