//! Session manager - the client-side auth state machine
//!
//! Owns token persistence, expiry validation on startup, and the
//! fresh-load-vs-reload initial-route policy. Token decoding here is
//! advisory UI gating only; the backend verifies signatures on every
//! request.

use std::sync::Arc;

use chrono::Utc;
use pawtrack_domain::constants::{DASHBOARD_PATH, ROOT_PATH};
use pawtrack_domain::{PawTrackError, Result};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::ports::{SessionFlag, TokenStore};
use super::token::decode_claims;

/// The persisted access/refresh token pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Authentication state as seen by the UI shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Authenticated { user: String },
    Unauthenticated,
}

impl SessionState {
    /// Whether this state carries a valid session.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }
}

/// Client-side session lifecycle manager.
///
/// State machine: construction is the implicit `Initializing` state;
/// [`SessionManager::initialize`] resolves it to `Authenticated` or
/// `Unauthenticated`, and `Authenticated -> Unauthenticated` happens on
/// explicit logout or detected expiry.
pub struct SessionManager {
    store: Arc<dyn TokenStore>,
    flag: Arc<dyn SessionFlag>,
    state: RwLock<SessionState>,
    tokens: RwLock<Option<TokenPair>>,
}

impl SessionManager {
    /// Create a manager over the given storage capabilities.
    #[must_use]
    pub fn new(store: Arc<dyn TokenStore>, flag: Arc<dyn SessionFlag>) -> Self {
        Self {
            store,
            flag,
            state: RwLock::new(SessionState::Unauthenticated),
            tokens: RwLock::new(None),
        }
    }

    /// Resolve the startup state from persisted tokens.
    ///
    /// Fails soft by design: any storage or decode problem is logged and
    /// resolved to `Unauthenticated`, and stale tokens are never left
    /// persisted. This method does not return an error.
    pub async fn initialize(&self) -> SessionState {
        let loaded = match self.store.load().await {
            Ok(loaded) => loaded,
            Err(err) => {
                warn!(error = %err, "token store unreadable, treating as unauthenticated");
                self.clear_persisted().await;
                return self.transition(SessionState::Unauthenticated, None).await;
            }
        };

        let Some(pair) = loaded else {
            debug!("no persisted tokens found");
            return self.transition(SessionState::Unauthenticated, None).await;
        };

        let claims = match decode_claims(&pair.access_token) {
            Ok(claims) => claims,
            Err(err) => {
                warn!(error = %err, "persisted access token is malformed, clearing session");
                self.clear_persisted().await;
                return self.transition(SessionState::Unauthenticated, None).await;
            }
        };

        if claims.is_expired(Utc::now()) {
            info!(user = %claims.username, "persisted access token expired, clearing session");
            self.clear_persisted().await;
            return self.transition(SessionState::Unauthenticated, None).await;
        }

        info!(user = %claims.username, "session restored from persisted tokens");
        self.transition(SessionState::Authenticated { user: claims.username }, Some(pair)).await
    }

    /// Persist freshly issued tokens and transition to `Authenticated`.
    ///
    /// # Errors
    /// Returns `PawTrackError::InvalidInput` if the access token cannot be
    /// decoded (nothing is persisted in that case), or a storage error if
    /// persistence fails.
    pub async fn login(&self, access_token: String, refresh_token: String) -> Result<SessionState> {
        let claims = decode_claims(&access_token)
            .map_err(|err| PawTrackError::InvalidInput(format!("undecodable access token: {err}")))?;

        let pair = TokenPair { access_token, refresh_token };
        self.store.store(&pair).await?;

        info!(user = %claims.username, "login successful");
        Ok(self.transition(SessionState::Authenticated { user: claims.username }, Some(pair)).await)
    }

    /// Clear persisted tokens and the session marker, transition to
    /// `Unauthenticated`.
    ///
    /// # Errors
    /// Returns a storage error if token deletion fails. In-memory state and
    /// the marker are cleared regardless, so the UI never stays logged in.
    pub async fn logout(&self) -> Result<()> {
        self.flag.clear();
        let _ = self.transition(SessionState::Unauthenticated, None).await;
        self.store.clear().await?;

        info!("logged out");
        Ok(())
    }

    /// Apply the initial-route policy for the given current path.
    ///
    /// First load of a session (marker unset) landing on the root path is
    /// redirected to the dashboard; a reload within the same session keeps
    /// whatever route the user was on. The marker is set by the first call
    /// regardless of path.
    pub fn initial_route(&self, current_path: &str) -> Option<&'static str> {
        if self.flag.is_set() {
            return None;
        }

        self.flag.set();
        if current_path == ROOT_PATH {
            debug!("fresh session load at root, redirecting to dashboard");
            Some(DASHBOARD_PATH)
        } else {
            debug!(path = %current_path, "fresh session load on deep link, staying put");
            None
        }
    }

    /// Current state snapshot.
    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }

    /// Whether a session is currently active.
    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_authenticated()
    }

    /// Current access token for the API layer, if authenticated.
    pub async fn access_token(&self) -> Option<String> {
        self.tokens.read().await.as_ref().map(|pair| pair.access_token.clone())
    }

    async fn transition(&self, next: SessionState, tokens: Option<TokenPair>) -> SessionState {
        *self.tokens.write().await = tokens;
        *self.state.write().await = next.clone();
        next
    }

    /// Best-effort clear of the persisted pair; initialize never propagates
    /// storage errors to the caller.
    async fn clear_persisted(&self) {
        if let Err(err) = self.store.clear().await {
            warn!(error = %err, "failed to clear persisted tokens");
        }
    }
}
