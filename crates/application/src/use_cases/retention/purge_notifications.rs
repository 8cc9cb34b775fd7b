use crate::ports::{Clock, NotificationRepository};
use notifyd_domain::{
    DomainError, Notification, PurgeDecision, PurgeOutcome, RecordScope, RetentionPolicy,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Use case: keep the notification store between its low- and high-water
/// marks. One call is one purge cycle.
pub struct PurgeNotificationsUseCase {
    repo: Arc<dyn NotificationRepository>,
    clock: Arc<dyn Clock>,
    policy: RetentionPolicy,
    scope: RecordScope,
}

impl PurgeNotificationsUseCase {
    pub fn new(
        repo: Arc<dyn NotificationRepository>,
        clock: Arc<dyn Clock>,
        policy: RetentionPolicy,
    ) -> Self {
        Self {
            repo,
            clock,
            policy,
            scope: RecordScope::All,
        }
    }

    pub fn with_scope(mut self, scope: RecordScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn policy(&self) -> &RetentionPolicy {
        &self.policy
    }

    pub fn scope(&self) -> RecordScope {
        self.scope
    }

    /// Pure decision step. `boundary` is the record at rank `min_cap` from
    /// the newest, or `None` when the store had no such record.
    pub fn decide(
        policy: &RetentionPolicy,
        total: u64,
        boundary: Option<&Notification>,
        now_ms: i64,
    ) -> Result<PurgeDecision, DomainError> {
        if !policy.is_over_capacity(total) {
            return Ok(PurgeDecision::skip());
        }

        match boundary {
            Some(record) => PurgeDecision::from_boundary(now_ms, record.modified),
            None => Err(DomainError::InconsistentState(format!(
                "total count {} reached max_cap {} but no record exists at offset {}",
                total,
                policy.max_cap(),
                policy.min_cap()
            ))),
        }
    }

    pub async fn execute(&self) -> Result<PurgeOutcome, DomainError> {
        let scope = self.scope;
        let total = self.repo.total_count(scope).await?;

        if !self.policy.is_over_capacity(total) {
            debug!(
                scope = scope.as_str(),
                total,
                max_cap = self.policy.max_cap(),
                "Notification store below high-water mark"
            );
            return Ok(PurgeOutcome::Skipped { scope, total });
        }

        debug!(
            scope = scope.as_str(),
            total,
            min_cap = self.policy.min_cap(),
            "Purging notifications down to the minimum capacity"
        );

        let boundary = match self
            .repo
            .latest_by_offset(scope, self.policy.min_cap())
            .await
        {
            Ok(record) => Some(record),
            Err(DomainError::NotFound(_)) => None,
            Err(e) => return Err(e),
        };

        let now_ms = self.clock.now_millis();
        let decision = Self::decide(&self.policy, total, boundary.as_ref(), now_ms)?;

        let deleted = self
            .repo
            .cleanup_by_age(scope, decision.age_cutoff_ms)
            .await?;

        info!(
            scope = scope.as_str(),
            total,
            deleted,
            age_cutoff_ms = decision.age_cutoff_ms,
            "Notifications purged"
        );

        Ok(PurgeOutcome::Purged {
            scope,
            total,
            age_cutoff_ms: decision.age_cutoff_ms,
            deleted,
        })
    }
}
