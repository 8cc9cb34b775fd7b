//! notifyd Domain Layer
pub mod config;
pub mod errors;
pub mod notification;
pub mod retention;
pub mod transmission;

pub use config::{CliOverrides, Config, ConfigError, RetentionConfig};
pub use errors::DomainError;
pub use notification::{Notification, NotificationStatus, RecordScope, Severity};
pub use retention::{PurgeDecision, PurgeOutcome, RetentionPolicy, SchedulerState};
pub use transmission::{Transmission, TransmissionStatus};
