//! In-memory token store and session marker

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use pawtrack_core::{SessionFlag, TokenPair, TokenStore};
use pawtrack_domain::Result;
use tokio::sync::RwLock;

/// Token store that keeps the pair in process memory only.
#[derive(Default)]
pub struct MemoryTokenStore {
    tokens: RwLock<Option<TokenPair>>,
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn store(&self, tokens: &TokenPair) -> Result<()> {
        *self.tokens.write().await = Some(tokens.clone());
        Ok(())
    }

    async fn load(&self) -> Result<Option<TokenPair>> {
        Ok(self.tokens.read().await.clone())
    }

    async fn clear(&self) -> Result<()> {
        *self.tokens.write().await = None;
        Ok(())
    }
}

/// Process-lifetime session marker.
///
/// Mirrors a per-tab marker: set on first route decision, gone when the
/// process exits.
#[derive(Default)]
pub struct MemorySessionFlag {
    set: AtomicBool,
}

impl SessionFlag for MemorySessionFlag {
    fn is_set(&self) -> bool {
        self.set.load(Ordering::SeqCst)
    }

    fn set(&self) {
        self.set.store(true, Ordering::SeqCst);
    }

    fn clear(&self) {
        self.set.store(false, Ordering::SeqCst);
    }
}
