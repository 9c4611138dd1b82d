//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `tokens` is the storage layer for credentials; `session` derives the
//! authenticated view of the UI from it.

pub mod session;
pub mod tokens;
