//! Session vault trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::session::model::StoredSession;

/// Durable storage for the persisted session artifacts.
///
/// The session service is the sole writer. Implementations must treat
/// unreadable or malformed persisted data as absent rather than failing
/// `load`, so hydration can always terminate.
#[async_trait]
pub trait SessionVault: Send + Sync {
    /// Loads the persisted artifacts, or an empty record if none exist.
    async fn load(&self) -> Result<StoredSession>;

    /// Replaces the persisted artifacts as one document.
    async fn store(&self, session: &StoredSession) -> Result<()>;

    /// Removes all persisted artifacts. Idempotent.
    async fn clear(&self) -> Result<()>;
}
