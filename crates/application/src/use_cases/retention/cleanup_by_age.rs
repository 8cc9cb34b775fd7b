use crate::ports::NotificationRepository;
use notifyd_domain::{DomainError, RecordScope};
use std::sync::Arc;
use tracing::info;

/// Use case: one-shot removal of notifications (and their transmissions)
/// older than a given age
pub struct CleanupNotificationsByAgeUseCase {
    repo: Arc<dyn NotificationRepository>,
}

impl CleanupNotificationsByAgeUseCase {
    pub fn new(repo: Arc<dyn NotificationRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, scope: RecordScope, age_ms: i64) -> Result<u64, DomainError> {
        if age_ms < 0 {
            return Err(DomainError::InvalidArgument(format!(
                "age must not be negative, got {}",
                age_ms
            )));
        }

        let deleted = self.repo.cleanup_by_age(scope, age_ms).await?;
        info!(deleted, age_ms, scope = scope.as_str(), "Old notifications cleaned up");
        Ok(deleted)
    }
}
