//! Client-side session/auth lifecycle
//!
//! Token storage, advisory claim decoding, the auth state machine, and the
//! initial-route policy. Storage is injected through the [`ports`] traits so
//! tests and embedders choose where tokens actually live.

pub mod ports;
pub mod service;
pub mod token;

pub use service::{SessionManager, SessionState, TokenPair};
