//! Backend API integration
//!
//! Typed HTTP client, wire DTOs, bearer-token sourcing and error
//! classification for the pet health backend.

pub mod auth;
pub mod client;
pub mod dto;
pub mod errors;

// Re-export commonly used items
pub use auth::{AccessTokenProvider, SessionTokenProvider};
pub use client::{ApiClient, ApiClientConfig};
pub use errors::{ApiError, ApiErrorCategory};
