//! Persisted session vault backed by an atomic TOML file.

use std::path::PathBuf;
use std::sync::Arc;

use clearfeed_core::error::Result;
use clearfeed_core::session::{SessionVault, StoredSession};

use crate::dto::StoredSessionDoc;
use crate::paths::ClearfeedPaths;
use crate::storage::AtomicTomlFile;

/// File-backed implementation of [`SessionVault`].
///
/// The session service is the sole writer. A document that cannot be
/// parsed is treated as absent: hydration must always terminate, so a
/// corrupt file degrades to "no session" with a warning instead of an
/// error.
pub struct TomlSessionVault {
    file: Arc<AtomicTomlFile<StoredSessionDoc>>,
}

impl TomlSessionVault {
    /// Creates a vault at the default platform location
    /// (`<config>/clearfeed/session.toml`).
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(ClearfeedPaths::session_file()?))
    }

    /// Creates a vault at an explicit path. Used by tests and embedders
    /// that manage their own directories.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: Arc::new(AtomicTomlFile::new(path)),
        }
    }
}

#[async_trait::async_trait]
impl SessionVault for TomlSessionVault {
    async fn load(&self) -> Result<StoredSession> {
        let file = self.file.clone();
        let doc = tokio::task::spawn_blocking(move || file.load())
            .await
            .map_err(|e| {
                clearfeed_core::ClearfeedError::internal(format!("Failed to join task: {e}"))
            })?;

        match doc {
            Ok(Some(doc)) => Ok(doc.into()),
            Ok(None) => Ok(StoredSession::default()),
            Err(e) => {
                tracing::warn!("Discarding unreadable session file: {e}");
                Ok(StoredSession::default())
            }
        }
    }

    async fn store(&self, session: &StoredSession) -> Result<()> {
        let mut doc = StoredSessionDoc::from(session);
        doc.updated_at = Some(chrono::Utc::now().to_rfc3339());

        let file = self.file.clone();
        tokio::task::spawn_blocking(move || file.save(&doc))
            .await
            .map_err(|e| {
                clearfeed_core::ClearfeedError::internal(format!("Failed to join task: {e}"))
            })?
    }

    async fn clear(&self) -> Result<()> {
        let file = self.file.clone();
        tokio::task::spawn_blocking(move || file.remove())
            .await
            .map_err(|e| {
                clearfeed_core::ClearfeedError::internal(format!("Failed to join task: {e}"))
            })?
    }
}
