use super::event_type::EventType;
use chrono::{DateTime, Local, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Fractional-second digits kept in `clock_events` timestamps.
pub const STORED_SUBSEC_DIGITS: u16 = 6;

/// A single clock-in / clock-out record, as stored in `clock_events`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockEvent {
    pub id: i64,                     // ⇔ clock_events.id
    #[serde(rename = "type")]
    pub kind: EventType,             // ⇔ clock_events.kind ('IN' | 'OUT')
    pub occurred_at: DateTime<Utc>,  // ⇔ clock_events.occurred_at
    pub created_at: DateTime<Utc>,   // ⇔ clock_events.created_at
}

impl ClockEvent {
    /// Build an event not yet persisted (`id = 0`, assigned by the store).
    ///
    /// Timestamps are cut to the stored precision (microseconds), so the
    /// returned event equals what is read back later.
    pub fn new(kind: EventType, occurred_at: DateTime<Utc>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: 0,
            kind,
            occurred_at: occurred_at.trunc_subsecs(STORED_SUBSEC_DIGITS),
            created_at: created_at.trunc_subsecs(STORED_SUBSEC_DIGITS),
        }
    }

    /// Total ordering used everywhere: occurred_at, then created_at, then id.
    pub fn chrono_cmp(&self, other: &Self) -> Ordering {
        self.occurred_at
            .cmp(&other.occurred_at)
            .then_with(|| self.created_at.cmp(&other.created_at))
            .then_with(|| self.id.cmp(&other.id))
    }

    pub fn local_time(&self) -> DateTime<Local> {
        self.occurred_at.with_timezone(&Local)
    }

    pub fn get_date_time(&self) -> String {
        self.local_time().format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
