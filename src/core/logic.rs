//! Entry points used by the command handlers.
//!
//! Every read takes its own snapshot of the log and projects it through the
//! pure calculators; nothing derived is kept between calls.

use crate::core::calculator::intervals::{day_end, day_start};
use crate::core::calculator::status::derive_status;
use crate::core::clock::ClockLogic;
use crate::core::del::DeleteLogic;
use crate::core::edit::EditLogic;
use crate::core::summary::SummaryLogic;
use crate::db::pool::DbPool;
use crate::db::queries::{latest_event, load_events_between};
use crate::errors::AppResult;
use crate::models::day_summary::SummaryReport;
use crate::models::event::ClockEvent;
use crate::models::event_type::EventType;
use crate::models::status::{DeleteResult, DeletionImpact, Status};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

pub struct Core;

impl Core {
    pub fn get_status(pool: &mut DbPool) -> AppResult<Status> {
        let latest = latest_event(&pool.conn)?;
        Ok(derive_status(latest.as_slice()))
    }

    /// Events between the start of `from` and the end of `to` (local days),
    /// oldest first. Missing bounds are open.
    pub fn list_events<Tz: TimeZone>(
        pool: &mut DbPool,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        tz: &Tz,
    ) -> AppResult<Vec<ClockEvent>> {
        let start = from.map(|d| day_start(tz, d));
        let end = to.map(|d| day_end(tz, d));
        load_events_between(&pool.conn, start.as_ref(), end.as_ref())
    }

    pub fn get_summary<Tz: TimeZone>(
        pool: &mut DbPool,
        from: NaiveDate,
        to: NaiveDate,
        tz: &Tz,
        now: DateTime<Utc>,
    ) -> AppResult<SummaryReport> {
        SummaryLogic::build(pool, from, to, tz, now)
    }

    pub fn record_event(
        pool: &mut DbPool,
        kind: EventType,
        occurred_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> AppResult<ClockEvent> {
        ClockLogic::record_event(pool, kind, occurred_at, now)
    }

    pub fn get_deletion_impact(pool: &mut DbPool, id: i64) -> AppResult<DeletionImpact> {
        DeleteLogic::impact(pool, id)
    }

    pub fn delete_event(pool: &mut DbPool, id: i64) -> AppResult<DeleteResult> {
        DeleteLogic::apply(pool, id)
    }

    pub fn update_event(
        pool: &mut DbPool,
        id: i64,
        kind: EventType,
        occurred_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> AppResult<ClockEvent> {
        EditLogic::apply(pool, id, kind, occurred_at, now)
    }
}
