//! # PawTrack Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The REST API client for the pet-health backend
//! - Token storage implementations (file-backed and in-memory)
//! - Configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `pawtrack-core`
//! - Depends on `pawtrack-domain` and `pawtrack-core`
//! - Contains all "impure" code (HTTP, filesystem, environment)

pub mod api;
pub mod config;
pub mod storage;

// Re-export commonly used items
pub use api::{AccessTokenProvider, ApiClient, ApiClientConfig, ApiError, SessionTokenProvider};
pub use config::{ApiConfig, AppConfig, StorageConfig};
pub use storage::{FileTokenStore, MemorySessionFlag, MemoryTokenStore};
