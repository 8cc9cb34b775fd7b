use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransmissionStatus {
    Acknowledged,
    Failed,
    Sent,
    Escalated,
    Resending,
}

impl TransmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransmissionStatus::Acknowledged => "ACKNOWLEDGED",
            TransmissionStatus::Failed => "FAILED",
            TransmissionStatus::Sent => "SENT",
            TransmissionStatus::Escalated => "ESCALATED",
            TransmissionStatus::Resending => "RESENDING",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "ACKNOWLEDGED" => Some(TransmissionStatus::Acknowledged),
            "FAILED" => Some(TransmissionStatus::Failed),
            "SENT" => Some(TransmissionStatus::Sent),
            "ESCALATED" => Some(TransmissionStatus::Escalated),
            "RESENDING" => Some(TransmissionStatus::Resending),
            _ => None,
        }
    }
}

/// A delivery attempt of one notification to one subscription channel.
#[derive(Debug, Clone)]
pub struct Transmission {
    pub id: Option<i64>,
    pub notification_id: i64,
    pub subscription_name: Arc<str>,
    pub channel: Arc<str>,
    pub status: TransmissionStatus,
    pub created: i64,
    pub modified: i64,
}

impl Transmission {
    pub fn new(notification_id: i64, subscription_name: &str, channel: &str, modified: i64) -> Self {
        Self {
            id: None,
            notification_id,
            subscription_name: Arc::from(subscription_name),
            channel: Arc::from(channel),
            status: TransmissionStatus::Sent,
            created: modified,
            modified,
        }
    }
}
