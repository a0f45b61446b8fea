//! Derives the current duty status from the event log.
//!
//! The status is never stored: it is a projection of the most recent event,
//! where "most recent" means the greatest `(occurred_at, created_at, id)`.

use crate::models::event::ClockEvent;
use crate::models::status::Status;

/// Derive the status from a log ordered newest first.
///
/// Only the first element matters: the subject is on duty iff it is an IN.
pub fn derive_status(events_desc: &[ClockEvent]) -> Status {
    match events_desc.first() {
        Some(ev) => Status {
            clocked_in: ev.kind.is_in(),
            last_event: Some(ev.clone()),
        },
        None => Status::default(),
    }
}

/// Latest event of an arbitrarily ordered slice.
pub fn latest_event(events: &[ClockEvent]) -> Option<&ClockEvent> {
    events.iter().max_by(|a, b| a.chrono_cmp(b))
}

/// Same as `derive_status`, without requiring any particular order.
pub fn status_of(events: &[ClockEvent]) -> Status {
    match latest_event(events) {
        Some(ev) => Status {
            clocked_in: ev.kind.is_in(),
            last_event: Some(ev.clone()),
        },
        None => Status::default(),
    }
}
