//! Port interfaces for session persistence
//!
//! These traits define the boundaries between the session state machine and
//! whatever actually stores tokens and the per-session marker. They exist so
//! tests can substitute in-memory implementations for the durable ones.

use async_trait::async_trait;
use pawtrack_domain::Result;

use super::TokenPair;

/// Durable storage for the access/refresh token pair.
///
/// Writes are last-writer-wins; callers never hold partial state across
/// calls, so no finer coordination is needed.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Persist both tokens, replacing any existing pair.
    ///
    /// # Errors
    /// Returns `PawTrackError::Storage` if persistence fails.
    async fn store(&self, tokens: &TokenPair) -> Result<()>;

    /// Load the persisted pair, or `None` if nothing is stored.
    ///
    /// # Errors
    /// Returns `PawTrackError::Storage` if the store cannot be read.
    async fn load(&self) -> Result<Option<TokenPair>>;

    /// Remove any persisted tokens. Removing an empty store is not an error.
    ///
    /// # Errors
    /// Returns `PawTrackError::Storage` if deletion fails.
    async fn clear(&self) -> Result<()>;
}

/// Session-scoped "already loaded" marker.
///
/// Distinguishes a fresh navigation from a reload within the same session.
/// Implementations are expected to vanish when the session ends, so a
/// subsequent fresh navigation is treated as first-load again.
pub trait SessionFlag: Send + Sync {
    /// Whether the marker is set.
    fn is_set(&self) -> bool;

    /// Set the marker.
    fn set(&self);

    /// Clear the marker.
    fn clear(&self);
}
