use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{find_event, update_event};
use crate::errors::{AppError, AppResult};
use crate::models::event::{ClockEvent, STORED_SUBSEC_DIGITS};
use crate::models::event_type::EventType;
use chrono::{DateTime, SubsecRound, Utc};
use rusqlite::TransactionBehavior;

/// Replace type and timestamp of an existing event.
///
/// Edits are full replacements: both fields are required. `id` and
/// `created_at` never change. Same rules as a manual add: the new instant
/// must be in the past, alternation is not checked.
pub struct EditLogic;

impl EditLogic {
    pub fn apply(
        pool: &mut DbPool,
        id: i64,
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

        let existing = find_event(&tx, id)?.ok_or(AppError::NotFound(id))?;

        let updated = ClockEvent {
            kind,
            occurred_at: occurred_at.trunc_subsecs(STORED_SUBSEC_DIGITS),
            ..existing.clone()
        };
        update_event(&tx, &updated)?;

        ttlog(
            &tx,
            "edit",
            &id.to_string(),
            &format!(
                "{} {} → {} {}",
                existing.kind,
                existing.get_date_time(),
                updated.kind,
                updated.get_date_time()
            ),
        )?;

        tx.commit()?;
        Ok(updated)
    }
}
