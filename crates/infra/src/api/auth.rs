//! Bearer token sourcing for authenticated requests

use std::sync::Arc;

use async_trait::async_trait;
use pawtrack_core::SessionManager;

use super::errors::ApiError;

/// Supplies the bearer token attached to authenticated requests.
///
/// The client never reaches into session internals; it asks this port.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    async fn access_token(&self) -> Result<String, ApiError>;
}

/// Token provider backed by the live session.
pub struct SessionTokenProvider {
    session: Arc<SessionManager>,
}

impl SessionTokenProvider {
    #[must_use]
    pub fn new(session: Arc<SessionManager>) -> Self {
        Self { session }
    }
}

#[async_trait]
impl AccessTokenProvider for SessionTokenProvider {
    async fn access_token(&self) -> Result<String, ApiError> {
        self.session
            .access_token()
            .await
            .ok_or_else(|| ApiError::Auth("no active session".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Validates that an unauthenticated session yields an auth error.
    ///
    /// Assertions:
    /// - Confirms `access_token` returns `ApiError::Auth` with no session.
    #[tokio::test]
    async fn test_unauthenticated_session_is_auth_error() {
        let session = Arc::new(SessionManager::new(
            Arc::new(crate::storage::MemoryTokenStore::default()),
            Arc::new(crate::storage::MemorySessionFlag::default()),
        ));
        let provider = SessionTokenProvider::new(session);
        let err = provider.access_token().await.unwrap_err();
        assert!(matches!(err, ApiError::Auth(_)));
    }
}
