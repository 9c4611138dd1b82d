//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers and the auth gate via the
//! `State` extractor. It holds the parsed configuration and the backend
//! client; nothing in it is mutated after start-up, so requests share no
//! mutable state.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::backend::{BackendClient, BackendError};

/// Shared application state. Clone is required by Axum; inner fields are
/// Arc-wrapped or cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub backend: BackendClient,
}

impl AppState {
    /// Build state and the backend HTTP client from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: ServerConfig) -> Result<Self, BackendError> {
        let backend = BackendClient::new(&config.api_base_url, config.backend_timeout)?;
        Ok(Self { config: Arc::new(config), backend })
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
