use async_trait::async_trait;
use notifyd_application::ports::{Clock, NotificationRepository};
use notifyd_domain::{
    DomainError, Notification, NotificationStatus, RecordScope, Severity, Transmission,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::database::map_db_error;

type NotificationRow = (i64, String, String, String, String, String, i64, i64);

const NOTIFICATION_COLUMNS: &str =
    "id, category, content, sender, severity, status, created, modified";

pub struct SqliteNotificationRepository {
    pool: SqlitePool,
    clock: Arc<dyn Clock>,
}

impl SqliteNotificationRepository {
    pub fn new(pool: SqlitePool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }

    fn scope_filter(scope: RecordScope) -> &'static str {
        match scope {
            RecordScope::All => "1 = 1",
            RecordScope::Processed => "status = 'PROCESSED'",
        }
    }

    fn row_to_notification(row: NotificationRow) -> Notification {
        let (id, category, content, sender, severity, status, created, modified) = row;

        Notification {
            id: Some(id),
            category: Arc::from(category.as_str()),
            content: Arc::from(content.as_str()),
            sender: Arc::from(sender.as_str()),
            severity: Severity::from_str(&severity).unwrap_or(Severity::Normal),
            status: NotificationStatus::from_str(&status).unwrap_or(NotificationStatus::New),
            created,
            modified,
        }
    }

    #[instrument(skip(self, notification))]
    pub async fn add_notification(&self, notification: &Notification) -> Result<i64, DomainError> {
        let result = sqlx::query(
            "INSERT INTO notifications (category, content, sender, severity, status, created, modified)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(notification.category.as_ref())
        .bind(notification.content.as_ref())
        .bind(notification.sender.as_ref())
        .bind(notification.severity.as_str())
        .bind(notification.status.as_str())
        .bind(notification.created)
        .bind(notification.modified)
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Failed to insert notification"))?;

        Ok(result.last_insert_rowid())
    }

    #[instrument(skip(self, transmission))]
    pub async fn add_transmission(&self, transmission: &Transmission) -> Result<i64, DomainError> {
        let result = sqlx::query(
            "INSERT INTO transmissions (notification_id, subscription_name, channel, status, created, modified)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(transmission.notification_id)
        .bind(transmission.subscription_name.as_ref())
        .bind(transmission.channel.as_ref())
        .bind(transmission.status.as_str())
        .bind(transmission.created)
        .bind(transmission.modified)
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Failed to insert transmission"))?;

        Ok(result.last_insert_rowid())
    }

    #[instrument(skip(self))]
    pub async fn transmission_count(&self) -> Result<u64, DomainError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM transmissions")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to count transmissions"))?;

        Ok(count as u64)
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<Notification, DomainError> {
        let sql = format!(
            "SELECT {} FROM notifications WHERE id = ?",
            NOTIFICATION_COLUMNS
        );
        let row = sqlx::query_as::<_, NotificationRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to fetch notification"))?;

        row.map(Self::row_to_notification)
            .ok_or_else(|| DomainError::NotFound(format!("notification {}", id)))
    }
}

#[async_trait]
impl NotificationRepository for SqliteNotificationRepository {
    #[instrument(skip(self))]
    async fn total_count(&self, scope: RecordScope) -> Result<u64, DomainError> {
        let sql = format!(
            "SELECT COUNT(*) FROM notifications WHERE {}",
            Self::scope_filter(scope)
        );
        let (count,): (i64,) = sqlx::query_as(&sql)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to count notifications"))?;

        Ok(count as u64)
    }

    #[instrument(skip(self))]
    async fn latest_by_offset(
        &self,
        scope: RecordScope,
        offset: u64,
    ) -> Result<Notification, DomainError> {
        let offset = i64::try_from(offset)
            .map_err(|_| DomainError::InvalidArgument(format!("offset {} out of range", offset)))?;

        let sql = format!(
            "SELECT {} FROM notifications WHERE {}
             ORDER BY modified DESC, id DESC
             LIMIT 1 OFFSET ?",
            NOTIFICATION_COLUMNS,
            Self::scope_filter(scope)
        );
        let row = sqlx::query_as::<_, NotificationRow>(&sql)
            .bind(offset)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to query notification by offset"))?;

        row.map(Self::row_to_notification).ok_or_else(|| {
            DomainError::NotFound(format!(
                "no {} notification at offset {}",
                scope.as_str(),
                offset
            ))
        })
    }

    #[instrument(skip(self))]
    async fn cleanup_by_age(&self, scope: RecordScope, age_ms: i64) -> Result<u64, DomainError> {
        // now - modified >= age  <=>  modified <= now - age
        let cutoff = self.clock.now_millis().saturating_sub(age_ms);
        let filter = Self::scope_filter(scope);

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_db_error(e, "Failed to begin cleanup transaction"))?;

        let transmissions = sqlx::query(&format!(
            "DELETE FROM transmissions WHERE notification_id IN
                (SELECT id FROM notifications WHERE {} AND modified <= ?)",
            filter
        ))
        .bind(cutoff)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_db_error(e, "Failed to delete transmissions by age"))?
        .rows_affected();

        let notifications = sqlx::query(&format!(
            "DELETE FROM notifications WHERE {} AND modified <= ?",
            filter
        ))
        .bind(cutoff)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_db_error(e, "Failed to delete notifications by age"))?
        .rows_affected();

        tx.commit()
            .await
            .map_err(|e| map_db_error(e, "Failed to commit cleanup transaction"))?;

        debug!(
            scope = scope.as_str(),
            age_ms,
            cutoff,
            notifications,
            transmissions,
            "Notifications and transmissions deleted by age"
        );

        Ok(notifications)
    }
}
