//! Domain services used by the HTTP layer.
//!
//! DESIGN
//! ======
//! `token` and `gate` are pure and synchronous; `backend` is the only
//! service that performs I/O.

pub mod backend;
pub mod gate;
pub mod token;
