//! Networking modules for the auth REST routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the token/register calls and `types` defines the shared
//! wire schema also used by the server's proxy routes.

pub mod api;
pub mod types;
