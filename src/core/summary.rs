use crate::core::calculator::intervals::{day_end, summarize_days};
use crate::db::pool::DbPool;
use crate::db::queries::load_events_until;
use crate::errors::{AppError, AppResult};
use crate::models::day_summary::{DateRange, SummaryReport};
use crate::utils::date;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

pub struct SummaryLogic;

impl SummaryLogic {
    /// Both bounds are mandatory day keys (YYYY-MM-DD).
    pub fn parse_range(from: Option<&str>, to: Option<&str>) -> AppResult<(NaiveDate, NaiveDate)> {
        let (from, to) = match (from, to) {
            (Some(f), Some(t)) if !f.trim().is_empty() && !t.trim().is_empty() => (f, t),
            _ => return Err(AppError::RangeRequired),
        };

        let from_d = date::parse_date(from.trim())
            .ok_or_else(|| AppError::RangeMalformed(from.to_string()))?;
        let to_d =
            date::parse_date(to.trim()).ok_or_else(|| AppError::RangeMalformed(to.to_string()))?;

        Ok((from_d, to_d))
    }

    /// Per-day totals for `from..=to`, computed over one snapshot of the log.
    pub fn build<Tz: TimeZone>(
        pool: &mut DbPool,
        from: NaiveDate,
        to: NaiveDate,
        tz: &Tz,
        now: DateTime<Utc>,
    ) -> AppResult<SummaryReport> {
        let events = load_events_until(&pool.conn, &day_end(tz, to))?;
        let days = summarize_days(&events, from, to, tz, &now);

        Ok(SummaryReport {
            range: DateRange { from, to },
            days,
        })
    }
}
