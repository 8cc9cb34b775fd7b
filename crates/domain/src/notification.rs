use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Minor,
    Normal,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Minor => "MINOR",
            Severity::Normal => "NORMAL",
            Severity::Critical => "CRITICAL",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "MINOR" => Some(Severity::Minor),
            "NORMAL" => Some(Severity::Normal),
            "CRITICAL" => Some(Severity::Critical),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationStatus {
    New,
    Processed,
    Escalated,
}

impl NotificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationStatus::New => "NEW",
            NotificationStatus::Processed => "PROCESSED",
            NotificationStatus::Escalated => "ESCALATED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "NEW" => Some(NotificationStatus::New),
            "PROCESSED" => Some(NotificationStatus::Processed),
            "ESCALATED" => Some(NotificationStatus::Escalated),
            _ => None,
        }
    }
}

/// Subset of notifications a retention policy is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordScope {
    All,
    /// Only notifications already marked `PROCESSED`.
    Processed,
}

impl RecordScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordScope::All => "all",
            RecordScope::Processed => "processed",
        }
    }

    pub fn includes(&self, notification: &Notification) -> bool {
        match self {
            RecordScope::All => true,
            RecordScope::Processed => notification.status == NotificationStatus::Processed,
        }
    }
}

/// A stored notification. Its transmissions live and die with it.
///
/// `created` and `modified` are epoch milliseconds.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: Option<i64>,
    pub category: Arc<str>,
    pub content: Arc<str>,
    pub sender: Arc<str>,
    pub severity: Severity,
    pub status: NotificationStatus,
    pub created: i64,
    pub modified: i64,
}

impl Notification {
    pub fn new(category: &str, content: &str, sender: &str, modified: i64) -> Self {
        Self {
            id: None,
            category: Arc::from(category),
            content: Arc::from(content),
            sender: Arc::from(sender),
            severity: Severity::Normal,
            status: NotificationStatus::New,
            created: modified,
            modified,
        }
    }

    pub fn with_status(mut self, status: NotificationStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Milliseconds elapsed since the last modification, as seen at `now_ms`.
    pub fn age_ms(&self, now_ms: i64) -> i64 {
        now_ms - self.modified
    }

    pub fn is_processed(&self) -> bool {
        self.status == NotificationStatus::Processed
    }
}
