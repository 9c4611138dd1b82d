//! Reusable UI components.

pub mod auth_provider;
pub mod auth_form;
