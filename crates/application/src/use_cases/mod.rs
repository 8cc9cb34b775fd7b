pub mod retention;

pub use retention::{CleanupNotificationsByAgeUseCase, PurgeNotificationsUseCase};
