// Lifecycle status value objects

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WasteStatus {
    Pending,
    Collected,
    Dropped,
}

impl WasteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WasteStatus::Pending => "pending",
            WasteStatus::Collected => "collected",
            WasteStatus::Dropped => "dropped",
        }
    }
}

impl fmt::Display for WasteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
    Completed,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
            RequestStatus::Completed => "completed",
        }
    }

    /// Open requests hold their waste entry out of the marketplace.
    pub fn is_open(&self) -> bool {
        matches!(self, RequestStatus::Pending | RequestStatus::Approved)
    }

    pub fn can_transition_to(&self, next: RequestStatus) -> bool {
        matches!(
            (self, next),
            (RequestStatus::Pending, RequestStatus::Approved)
                | (RequestStatus::Pending, RequestStatus::Rejected)
                | (RequestStatus::Approved, RequestStatus::Completed)
        )
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportStatus {
    Scheduled,
    InTransit,
    Completed,
    Cancelled,
}

impl TransportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportStatus::Scheduled => "scheduled",
            TransportStatus::InTransit => "in_transit",
            TransportStatus::Completed => "completed",
            TransportStatus::Cancelled => "cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, TransportStatus::Completed | TransportStatus::Cancelled)
    }

    pub fn can_transition_to(&self, next: TransportStatus) -> bool {
        matches!(
            (self, next),
            (TransportStatus::Scheduled, TransportStatus::InTransit)
                | (TransportStatus::Scheduled, TransportStatus::Cancelled)
                | (TransportStatus::Scheduled, TransportStatus::Completed)
                | (TransportStatus::InTransit, TransportStatus::Cancelled)
                | (TransportStatus::InTransit, TransportStatus::Completed)
        )
    }
}

impl fmt::Display for TransportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_terminal_states_have_no_exit() {
        let all = [
            RequestStatus::Pending,
            RequestStatus::Approved,
            RequestStatus::Rejected,
            RequestStatus::Completed,
        ];
        for next in all {
            assert!(!RequestStatus::Rejected.can_transition_to(next));
            assert!(!RequestStatus::Completed.can_transition_to(next));
        }
    }

    #[test]
    fn pending_request_cannot_complete_directly() {
        assert!(!RequestStatus::Pending.can_transition_to(RequestStatus::Completed));
        assert!(RequestStatus::Approved.can_transition_to(RequestStatus::Completed));
    }

    #[test]
    fn transport_cannot_go_back_to_scheduled() {
        assert!(!TransportStatus::InTransit.can_transition_to(TransportStatus::Scheduled));
        assert!(!TransportStatus::Cancelled.can_transition_to(TransportStatus::InTransit));
        assert!(TransportStatus::Completed.is_terminal());
    }
}
