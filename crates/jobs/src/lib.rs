pub mod notification_purge;
pub mod runner;

pub use notification_purge::NotificationPurgeJob;
pub use runner::{JobRunner, RunningJobs};
