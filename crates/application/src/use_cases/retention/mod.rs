mod cleanup_by_age;
mod purge_notifications;

pub use cleanup_by_age::CleanupNotificationsByAgeUseCase;
pub use purge_notifications::PurgeNotificationsUseCase;
