use super::event::ClockEvent;
use serde::Serialize;

/// Current duty state, always derived from the latest event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    pub clocked_in: bool,
    pub last_event: Option<ClockEvent>,
}

impl Status {
    pub fn label(&self) -> &'static str {
        if self.clocked_in { "IN" } else { "OUT" }
    }
}

/// What deleting a given event would do to the current status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletionImpact {
    pub current_status: Status,
    pub next_status: Status,
    pub will_change_status: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub deleted_id: i64,
    pub status: Status,
}
