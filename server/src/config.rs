//! Server configuration parsed from environment variables.
//!
//! Variables (all optional):
//! - `PORT`: listen port, default 3000
//! - `API_BASE_URL`: backend base URL, default `http://backend:7777`
//! - `PROTECTED_PATHS`: comma-separated gated prefixes, default
//!   `/dashboard,/notes,/profile`
//! - `PUBLIC_URL`: origin the browser loads the site from, unset by default
//! - `COOKIE_SECURE`: `1/true/yes/on` or `0/false/no/off`; inferred from the
//!   `PUBLIC_URL` scheme when unset, `false` when neither is set
//! - `BACKEND_TIMEOUT_SECS`: backend request timeout, default 10

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_BASE_URL: &str = "http://backend:7777";
pub const DEFAULT_PROTECTED_PATHS: &[&str] = &["/dashboard", "/notes", "/profile"];
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 10;

/// Cookie carrying the server-visible copy of the access token.
pub const ACCESS_COOKIE_NAME: &str = "accessToken";
/// Where unauthenticated requests to gated paths are sent.
pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    /// A protected prefix does not start with `/`.
    #[error("protected path must start with '/': {0:?}")]
    ProtectedPath(String),
}

/// Auth gate settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateConfig {
    pub protected_prefixes: Vec<String>,
    pub login_path: String,
    pub cookie_name: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            protected_prefixes: DEFAULT_PROTECTED_PATHS.iter().map(|p| (*p).to_owned()).collect(),
            login_path: LOGIN_PATH.to_owned(),
            cookie_name: ACCESS_COOKIE_NAME.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub api_base_url: String,
    pub public_url: Option<String>,
    pub cookie_secure: bool,
    pub backend_timeout: Duration,
    pub gate: GateConfig,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if any set variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if any present variable fails to parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let api_base_url = lookup("API_BASE_URL")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();

        let public_url = lookup("PUBLIC_URL").map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        // The cookie is read by the browser, so only the public origin decides.
        let cookie_secure = match lookup("COOKIE_SECURE") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| ConfigError::Invalid { var: "COOKIE_SECURE", value: raw.clone() })?,
            None => public_url.as_deref().is_some_and(|url| url.starts_with("https://")),
        };

        let timeout_secs = parse_or("BACKEND_TIMEOUT_SECS", lookup("BACKEND_TIMEOUT_SECS"), DEFAULT_BACKEND_TIMEOUT_SECS)?;

        let mut gate = GateConfig::default();
        if let Some(raw) = lookup("PROTECTED_PATHS") {
            gate.protected_prefixes = parse_protected_paths(&raw)?;
        }

        Ok(Self { port, api_base_url, public_url, cookie_secure, backend_timeout: Duration::from_secs(timeout_secs), gate })
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse::<T>().map_err(|_| ConfigError::Invalid { var, value }),
    }
}

fn parse_protected_paths(raw: &str) -> Result<Vec<String>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| {
            if p.starts_with('/') {
                Ok(p.trim_end_matches('/').to_owned())
            } else {
                Err(ConfigError::ProtectedPath(p.to_owned()))
            }
        })
        .filter(|p| p.as_ref().map_or(true, |p| !p.is_empty()))
        .collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
