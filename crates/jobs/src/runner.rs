use crate::NotificationPurgeJob;
use futures::future::join_all;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

fn spawn_job(
    job: Option<NotificationPurgeJob>,
    shutdown: &CancellationToken,
    running: &mut RunningJobs,
) {
    if let Some(job) = job {
        let job = Arc::new(job.with_cancellation(shutdown.clone()));
        if let Some(handle) = job.start() {
            running.handles.push(handle);
        }
        running.jobs.push(job);
    }
}

pub struct JobRunner {
    notification_purge: Option<NotificationPurgeJob>,
    processed_purge: Option<NotificationPurgeJob>,
    shutdown: Option<CancellationToken>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            notification_purge: None,
            processed_purge: None,
            shutdown: None,
        }
    }

    pub fn with_notification_purge(mut self, job: NotificationPurgeJob) -> Self {
        self.notification_purge = Some(job);
        self
    }

    pub fn with_processed_purge(mut self, job: NotificationPurgeJob) -> Self {
        self.processed_purge = Some(job);
        self
    }

    pub fn with_shutdown_token(mut self, token: CancellationToken) -> Self {
        self.shutdown = Some(token);
        self
    }

    pub fn start(self) -> RunningJobs {
        info!("Starting background job runner");

        let shutdown = self.shutdown.unwrap_or_default();
        let mut running = RunningJobs {
            jobs: Vec::new(),
            handles: Vec::new(),
            shutdown: shutdown.clone(),
        };

        spawn_job(self.notification_purge, &shutdown, &mut running);
        spawn_job(self.processed_purge, &shutdown, &mut running);

        info!(jobs = running.jobs.len(), "All background jobs started");
        running
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Handles of the jobs started by a [`JobRunner`].
pub struct RunningJobs {
    jobs: Vec<Arc<NotificationPurgeJob>>,
    handles: Vec<JoinHandle<()>>,
    shutdown: CancellationToken,
}

impl RunningJobs {
    pub fn jobs(&self) -> &[Arc<NotificationPurgeJob>] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Cancels every job and waits for in-flight cycles to finish.
    pub async fn shutdown(self) {
        info!(jobs = self.jobs.len(), "Stopping background jobs");
        self.shutdown.cancel();

        for result in join_all(self.handles).await {
            if let Err(e) = result {
                error!(error = %e, "Background job terminated abnormally");
            }
        }

        info!("All background jobs stopped");
    }
}
