use crate::errors::DomainError;
use crate::notification::RecordScope;
use std::time::Duration;

/// Capacity bounds for a notification store.
///
/// Once the number of stored records reaches `max_cap`, the oldest ones are
/// evicted until only `min_cap` remain. Immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionPolicy {
    max_cap: u64,
    min_cap: u64,
    interval: Duration,
}

impl RetentionPolicy {
    pub fn new(max_cap: u64, min_cap: u64, interval: Duration) -> Result<Self, DomainError> {
        if min_cap > max_cap {
            return Err(DomainError::ConfigInvalid(format!(
                "min_cap ({}) must not exceed max_cap ({})",
                min_cap, max_cap
            )));
        }
        if interval.is_zero() {
            return Err(DomainError::ConfigInvalid(
                "evaluation interval must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            max_cap,
            min_cap,
            interval,
        })
    }

    pub fn max_cap(&self) -> u64 {
        self.max_cap
    }

    pub fn min_cap(&self) -> u64 {
        self.min_cap
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// High-water check. A store already at or below `min_cap` has nothing
    /// to evict even when `max_cap == min_cap`.
    pub fn is_over_capacity(&self, total: u64) -> bool {
        total >= self.max_cap && total > self.min_cap
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurgeDecision {
    pub should_purge: bool,
    pub age_cutoff_ms: i64,
}

impl PurgeDecision {
    pub fn skip() -> Self {
        Self {
            should_purge: false,
            age_cutoff_ms: 0,
        }
    }

    /// Cutoff that keeps the boundary record's newer siblings and evicts the
    /// boundary itself along with everything older.
    pub fn from_boundary(now_ms: i64, boundary_modified_ms: i64) -> Result<Self, DomainError> {
        let age_cutoff_ms = now_ms - boundary_modified_ms;
        if age_cutoff_ms < 0 {
            return Err(DomainError::InconsistentState(format!(
                "boundary record modified at {} is newer than now ({})",
                boundary_modified_ms, now_ms
            )));
        }
        Ok(Self {
            should_purge: true,
            age_cutoff_ms,
        })
    }
}

/// Result of one purge cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurgeOutcome {
    Skipped {
        scope: RecordScope,
        total: u64,
    },
    Purged {
        scope: RecordScope,
        total: u64,
        age_cutoff_ms: i64,
        deleted: u64,
    },
}

impl PurgeOutcome {
    pub fn deleted(&self) -> u64 {
        match self {
            PurgeOutcome::Skipped { .. } => 0,
            PurgeOutcome::Purged { deleted, .. } => *deleted,
        }
    }

    pub fn is_purged(&self) -> bool {
        matches!(self, PurgeOutcome::Purged { .. })
    }
}

/// Lifecycle of a purge scheduler. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SchedulerState {
    Idle = 0,
    Running = 1,
    Stopped = 2,
}

impl SchedulerState {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => SchedulerState::Idle,
            1 => SchedulerState::Running,
            _ => SchedulerState::Stopped,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SchedulerState::Idle => "idle",
            SchedulerState::Running => "running",
            SchedulerState::Stopped => "stopped",
        }
    }
}
