use notifyd_application::ports::Clock;
use notifyd_infrastructure::repositories::SqliteNotificationRepository;
use notifyd_infrastructure::system::SystemClock;
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub notification: Arc<SqliteNotificationRepository>,
    pub clock: Arc<dyn Clock>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock::new());
        Self {
            notification: Arc::new(SqliteNotificationRepository::new(pool, clock.clone())),
            clock,
        }
    }
}
