use crate::core::calculator::status::derive_status;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_event, latest_event};
use crate::errors::{AppError, AppResult};
use crate::models::event::ClockEvent;
use crate::models::event_type::EventType;
use chrono::{DateTime, Utc};
use rusqlite::TransactionBehavior;

/// Business logic for clocking in/out and for manual events.
///
/// The ON/OFF duty state is never stored: each action derives it from the
/// latest event, inside the same write transaction that records the new one.
pub struct ClockLogic;

impl ClockLogic {
    /// Start a session now. Fails if already clocked in.
    pub fn clock_in(pool: &mut DbPool, now: DateTime<Utc>) -> AppResult<ClockEvent> {
        Self::transition(pool, EventType::In, now)
    }

    /// End the running session now. Fails if already clocked out.
    pub fn clock_out(pool: &mut DbPool, now: DateTime<Utc>) -> AppResult<ClockEvent> {
        Self::transition(pool, EventType::Out, now)
    }

    /// Insert an event in the past, without checking alternation with the
    /// surrounding events.
    pub fn add_manual(
        pool: &mut DbPool,
        kind: EventType,
        occurred_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> AppResult<ClockEvent> {
        if occurred_at >= now {
            return Err(AppError::InvalidTimestamp(
                "Manual events must be in the past.".into(),
            ));
        }

        let tx = pool.conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let ev = insert_event(&tx, &ClockEvent::new(kind, occurred_at, now))?;
        ttlog(
            &tx,
            "add",
            &ev.id.to_string(),
            &format!("Manual {} at {}", ev.kind, ev.get_date_time()),
        )?;

        tx.commit()?;
        Ok(ev)
    }

    /// `occurred_at = None` is a clock action at `now`, otherwise a manual event.
    pub fn record_event(
        pool: &mut DbPool,
        kind: EventType,
        occurred_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> AppResult<ClockEvent> {
        match occurred_at {
            Some(at) => Self::add_manual(pool, kind, at, now),
            None => Self::transition(pool, kind, now),
        }
    }

    fn transition(pool: &mut DbPool, kind: EventType, now: DateTime<Utc>) -> AppResult<ClockEvent> {
        // IMMEDIATE takes the write lock before the status is read, so two
        // concurrent clock-ins cannot both pass the check.
        let tx = pool.conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let current = derive_status(latest_event(&tx)?.as_slice());
        if current.clocked_in == kind.is_in() {
            let msg = match kind {
                EventType::In => "Already clocked in.",
                EventType::Out => "Already clocked out.",
            };
            return Err(AppError::AlreadyInDesiredState(msg.into()));
        }

        let ev = insert_event(&tx, &ClockEvent::new(kind, now, now))?;

        let operation = match kind {
            EventType::In => "clock_in",
            EventType::Out => "clock_out",
        };
        ttlog(
            &tx,
            operation,
            &ev.id.to_string(),
            &format!("{} at {}", kind, ev.get_date_time()),
        )?;

        tx.commit()?;
        Ok(ev)
    }
}
