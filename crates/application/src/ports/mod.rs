mod clock;
mod notification_repository;

pub use clock::Clock;
pub use notification_repository::NotificationRepository;
