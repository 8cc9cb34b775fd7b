use super::Repositories;
use notifyd_application::use_cases::{
    CleanupNotificationsByAgeUseCase, PurgeNotificationsUseCase,
};
use notifyd_domain::{Config, DomainError, RecordScope};
use std::sync::Arc;

pub struct UseCases {
    pub purge_notifications: Option<Arc<PurgeNotificationsUseCase>>,
    pub purge_processed: Option<Arc<PurgeNotificationsUseCase>>,
    pub cleanup_by_age: Arc<CleanupNotificationsByAgeUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories, config: &Config) -> Result<Self, DomainError> {
        let purge_notifications = if config.retention.enabled {
            let policy = config.retention.to_policy()?;
            Some(Arc::new(PurgeNotificationsUseCase::new(
                repos.notification.clone(),
                repos.clock.clone(),
                policy,
            )))
        } else {
            None
        };

        let purge_processed = match &config.processed_retention {
            Some(section) if section.enabled => {
                let policy = section.to_policy()?;
                Some(Arc::new(
                    PurgeNotificationsUseCase::new(
                        repos.notification.clone(),
                        repos.clock.clone(),
                        policy,
                    )
                    .with_scope(RecordScope::Processed),
                ))
            }
            _ => None,
        };

        Ok(Self {
            purge_notifications,
            purge_processed,
            cleanup_by_age: Arc::new(CleanupNotificationsByAgeUseCase::new(
                repos.notification.clone(),
            )),
        })
    }
}
