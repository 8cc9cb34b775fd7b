#![allow(dead_code)]

use async_trait::async_trait;
use notifyd_application::ports::{Clock, NotificationRepository};
use notifyd_domain::{DomainError, Notification, NotificationStatus, RecordScope, Transmission};
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

pub struct FixedClock {
    now: AtomicI64,
}

impl FixedClock {
    pub fn at(now_ms: i64) -> Self {
        Self {
            now: AtomicI64::new(now_ms),
        }
    }

    pub fn set(&self, now_ms: i64) {
        self.now.store(now_ms, Ordering::SeqCst);
    }

    pub fn advance(&self, ms: i64) {
        self.now.fetch_add(ms, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

pub struct MockNotificationRepository {
    notifications: Arc<RwLock<Vec<Notification>>>,
    transmissions: Arc<RwLock<Vec<Transmission>>>,
    next_id: AtomicI64,
    clock: Arc<FixedClock>,
    count_override: Arc<RwLock<Option<u64>>>,
    fail_count: Arc<RwLock<bool>>,
    fail_offset: Arc<RwLock<bool>>,
    fail_cleanup: Arc<RwLock<bool>>,
    count_calls: Arc<AtomicU64>,
    offset_calls: Arc<AtomicU64>,
    cleanup_ages: Arc<RwLock<Vec<i64>>>,
}

impl MockNotificationRepository {
    pub fn new(clock: Arc<FixedClock>) -> Self {
        Self {
            notifications: Arc::new(RwLock::new(Vec::new())),
            transmissions: Arc::new(RwLock::new(Vec::new())),
            next_id: AtomicI64::new(1),
            clock,
            count_override: Arc::new(RwLock::new(None)),
            fail_count: Arc::new(RwLock::new(false)),
            fail_offset: Arc::new(RwLock::new(false)),
            fail_cleanup: Arc::new(RwLock::new(false)),
            count_calls: Arc::new(AtomicU64::new(0)),
            offset_calls: Arc::new(AtomicU64::new(0)),
            cleanup_ages: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn add(&self, mut notification: Notification) -> i64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        notification.id = Some(id);
        self.notifications.write().await.push(notification);
        id
    }

    /// Adds `count` notifications modified at `start_ms`, `start_ms + step_ms`, ...
    pub async fn seed(&self, count: u64, start_ms: i64, step_ms: i64) -> Vec<i64> {
        let mut ids = Vec::with_capacity(count as usize);
        for i in 0..count as i64 {
            let n = Notification::new("ALERT", "payload", "sensor", start_ms + i * step_ms);
            ids.push(self.add(n).await);
        }
        ids
    }

    pub async fn seed_processed(&self, count: u64, start_ms: i64, step_ms: i64) -> Vec<i64> {
        let mut ids = Vec::with_capacity(count as usize);
        for i in 0..count as i64 {
            let n = Notification::new("ALERT", "payload", "sensor", start_ms + i * step_ms)
                .with_status(NotificationStatus::Processed);
            ids.push(self.add(n).await);
        }
        ids
    }

    pub async fn add_transmission(&self, notification_id: i64) {
        let now = self.clock.now_millis();
        self.transmissions
            .write()
            .await
            .push(Transmission::new(notification_id, "ops", "EMAIL", now));
    }

    pub async fn count(&self) -> usize {
        self.notifications.read().await.len()
    }

    pub async fn count_processed(&self) -> usize {
        self.notifications
            .read()
            .await
            .iter()
            .filter(|n| n.is_processed())
            .count()
    }

    pub async fn transmission_count(&self) -> usize {
        self.transmissions.read().await.len()
    }

    pub async fn contains(&self, id: i64) -> bool {
        self.notifications
            .read()
            .await
            .iter()
            .any(|n| n.id == Some(id))
    }

    /// Makes `total_count` report a fixed value regardless of the contents.
    pub async fn set_count_override(&self, total: Option<u64>) {
        *self.count_override.write().await = total;
    }

    pub async fn set_fail_count(&self, fail: bool) {
        *self.fail_count.write().await = fail;
    }

    pub async fn set_fail_offset(&self, fail: bool) {
        *self.fail_offset.write().await = fail;
    }

    pub async fn set_fail_cleanup(&self, fail: bool) {
        *self.fail_cleanup.write().await = fail;
    }

    pub fn count_calls(&self) -> u64 {
        self.count_calls.load(Ordering::SeqCst)
    }

    pub fn offset_calls(&self) -> u64 {
        self.offset_calls.load(Ordering::SeqCst)
    }

    pub async fn cleanup_ages(&self) -> Vec<i64> {
        self.cleanup_ages.read().await.clone()
    }
}

#[async_trait]
impl NotificationRepository for MockNotificationRepository {
    async fn total_count(&self, scope: RecordScope) -> Result<u64, DomainError> {
        self.count_calls.fetch_add(1, Ordering::SeqCst);
        if *self.fail_count.read().await {
            return Err(DomainError::StorageUnavailable("connection refused".to_string()));
        }
        if let Some(total) = *self.count_override.read().await {
            return Ok(total);
        }
        Ok(self
            .notifications
            .read()
            .await
            .iter()
            .filter(|n| scope.includes(n))
            .count() as u64)
    }

    async fn latest_by_offset(
        &self,
        scope: RecordScope,
        offset: u64,
    ) -> Result<Notification, DomainError> {
        self.offset_calls.fetch_add(1, Ordering::SeqCst);
        if *self.fail_offset.read().await {
            return Err(DomainError::QueryFailed("offset lookup failed".to_string()));
        }
        let mut ranked: Vec<Notification> = self
            .notifications
            .read()
            .await
            .iter()
            .filter(|n| scope.includes(n))
            .cloned()
            .collect();
        ranked.sort_by(|a, b| b.modified.cmp(&a.modified).then(b.id.cmp(&a.id)));
        ranked
            .into_iter()
            .nth(offset as usize)
            .ok_or_else(|| DomainError::NotFound(format!("no notification at offset {}", offset)))
    }

    async fn cleanup_by_age(&self, scope: RecordScope, age_ms: i64) -> Result<u64, DomainError> {
        self.cleanup_ages.write().await.push(age_ms);
        if *self.fail_cleanup.read().await {
            return Err(DomainError::QueryFailed("delete failed".to_string()));
        }
        let now = self.clock.now_millis();
        let mut notifications = self.notifications.write().await;
        let (expired, kept): (Vec<Notification>, Vec<Notification>) = notifications
            .drain(..)
            .partition(|n| scope.includes(n) && n.age_ms(now) >= age_ms);
        *notifications = kept;

        let expired_ids: Vec<i64> = expired.iter().filter_map(|n| n.id).collect();
        self.transmissions
            .write()
            .await
            .retain(|t| !expired_ids.contains(&t.notification_id));

        Ok(expired.len() as u64)
    }
}
