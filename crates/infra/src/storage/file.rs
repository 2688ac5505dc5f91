//! File-backed token persistence

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use pawtrack_core::{TokenPair, TokenStore};
use pawtrack_domain::{PawTrackError, Result};
use tracing::{debug, warn};

/// Persists the token pair as a JSON file on disk.
///
/// A missing file means no stored session; it is never an error. Reads that
/// fail to parse surface as [`PawTrackError::Storage`] so the session layer
/// can fall back to unauthenticated and clear the file.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn store(&self, tokens: &TokenPair) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| PawTrackError::Storage(format!("Failed to create token dir: {e}")))?;
        }

        let json = serde_json::to_string_pretty(tokens)
            .map_err(|e| PawTrackError::Storage(format!("Failed to serialize tokens: {e}")))?;

        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| PawTrackError::Storage(format!("Failed to write token file: {e}")))?;

        debug!(path = %self.path.display(), "tokens persisted");
        Ok(())
    }

    async fn load(&self) -> Result<Option<TokenPair>> {
        let json = match tokio::fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(PawTrackError::Storage(format!("Failed to read token file: {e}")));
            }
        };

        let tokens = serde_json::from_str(&json).map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "token file corrupt");
            PawTrackError::Storage(format!("Failed to parse token file: {e}"))
        })?;

        Ok(Some(tokens))
    }

    async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PawTrackError::Storage(format!("Failed to remove token file: {e}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> TokenPair {
        TokenPair { access_token: "acc".to_string(), refresh_token: "ref".to_string() }
    }

    /// Validates the store/load round trip through the filesystem.
    ///
    /// Assertions:
    /// - Confirms stored tokens load back intact.
    /// - Confirms parent directories are created on demand.
    #[tokio::test]
    async fn test_store_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("nested").join("tokens.json"));

        store.store(&pair()).await.unwrap();
        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.access_token, "acc");
        assert_eq!(loaded.refresh_token, "ref");
    }

    /// Validates missing-file behavior.
    ///
    /// Assertions:
    /// - Confirms `load` on a missing file yields `Ok(None)`.
    /// - Confirms `clear` on a missing file succeeds.
    #[tokio::test]
    async fn test_missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("tokens.json"));

        assert!(store.load().await.unwrap().is_none());
        assert!(store.clear().await.is_ok());
    }

    /// Validates corrupt-file behavior.
    ///
    /// Assertions:
    /// - Confirms unparseable contents surface as a storage error.
    /// - Confirms `clear` removes the corrupt file.
    #[tokio::test]
    async fn test_corrupt_file_surfaces_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokens.json");
        tokio::fs::write(&path, "not json").await.unwrap();

        let store = FileTokenStore::new(&path);
        assert!(matches!(store.load().await, Err(PawTrackError::Storage(_))));

        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
    }
}
