use notifyd_application::use_cases::PurgeNotificationsUseCase;
use notifyd_domain::{PurgeOutcome, SchedulerState};
use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

/// Background job that keeps the notification store under its high-water
/// mark. Each instance runs at most one loop; once stopped it stays stopped.
pub struct NotificationPurgeJob {
    purge: Arc<PurgeNotificationsUseCase>,
    interval: Duration,
    state: AtomicU8,
    cycles: AtomicU64,
    shutdown: CancellationToken,
}

impl NotificationPurgeJob {
    pub fn new(purge: Arc<PurgeNotificationsUseCase>) -> Self {
        let interval = purge.policy().interval();
        Self {
            purge,
            interval,
            state: AtomicU8::new(SchedulerState::Idle.as_u8()),
            cycles: AtomicU64::new(0),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn state(&self) -> SchedulerState {
        SchedulerState::from_u8(self.state.load(Ordering::Acquire))
    }

    /// Number of purge cycles started so far.
    pub fn cycles_run(&self) -> u64 {
        self.cycles.load(Ordering::Acquire)
    }

    pub fn stop(&self) {
        self.shutdown.cancel();
    }

    /// Spawns the purge loop on the first call and returns its handle.
    /// Later calls, including after the job stopped, do nothing.
    pub fn start(self: &Arc<Self>) -> Option<JoinHandle<()>> {
        if self
            .state
            .compare_exchange(
                SchedulerState::Idle.as_u8(),
                SchedulerState::Running.as_u8(),
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_err()
        {
            debug!(
                state = self.state().as_str(),
                "Notification purge job already started"
            );
            return None;
        }

        info!(
            scope = self.purge.scope().as_str(),
            max_cap = self.purge.policy().max_cap(),
            min_cap = self.purge.policy().min_cap(),
            interval_ms = self.interval.as_millis() as u64,
            "Starting notification purge job"
        );

        let job = Arc::clone(self);
        Some(tokio::spawn(async move { job.run().await }))
    }

    async fn run(&self) {
        loop {
            // The wait is re-armed only after the previous cycle returned,
            // so a slow purge delays the next one instead of stacking up.
            tokio::select! {
                biased;
                _ = self.shutdown.cancelled() => break,
                _ = tokio::time::sleep(self.interval) => {}
            }
            self.run_cycle().await;
        }

        self.state
            .store(SchedulerState::Stopped.as_u8(), Ordering::Release);
        info!(
            scope = self.purge.scope().as_str(),
            "Exiting notification retention"
        );
    }

    async fn run_cycle(&self) {
        self.cycles.fetch_add(1, Ordering::AcqRel);
        let scope = self.purge.scope().as_str();

        match self.purge.execute().await {
            Ok(PurgeOutcome::Purged { total, deleted, .. }) => {
                debug!(scope, total, deleted, "Notification purge cycle completed");
            }
            Ok(PurgeOutcome::Skipped { total, .. }) => {
                debug!(scope, total, "Notification purge cycle skipped");
            }
            Err(e) => {
                error!(
                    error = %e,
                    scope,
                    transient = e.is_transient(),
                    "Failed to purge notifications and transmissions"
                );
            }
        }
    }
}
