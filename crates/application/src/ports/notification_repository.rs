use async_trait::async_trait;
use notifyd_domain::{DomainError, Notification, RecordScope};

/// Storage gateway consumed by the purge engine.
///
/// Every operation is scoped so the same protocol serves both the global
/// policy and the processed-only policy.
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Number of live notifications in `scope`.
    async fn total_count(&self, scope: RecordScope) -> Result<u64, DomainError>;

    /// Notification ranked `offset` positions back from the most recently
    /// modified one (0 = newest). `DomainError::NotFound` when the rank
    /// does not exist.
    async fn latest_by_offset(
        &self,
        scope: RecordScope,
        offset: u64,
    ) -> Result<Notification, DomainError>;

    /// Delete every notification in `scope` with `now - modified >= age_ms`
    /// together with its transmissions. Returns the number of notifications
    /// removed.
    async fn cleanup_by_age(&self, scope: RecordScope, age_ms: i64) -> Result<u64, DomainError>;
}
