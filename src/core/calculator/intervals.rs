//! Interval aggregation: rebuilds the on-duty intervals implied by the
//! IN/OUT sequence and sums their duration per local calendar day.

use crate::models::day_summary::DaySummary;
use crate::models::event::ClockEvent;
use crate::models::event_type::EventType;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use std::collections::BTreeMap;

const MS_PER_MINUTE: f64 = 60_000.0;

/// First instant of `day` in `tz`.
///
/// Midnight may not exist (DST gap at 00:00): in that case the first local
/// time of the day that does exist is used.
pub fn day_start<Tz: TimeZone>(tz: &Tz, day: NaiveDate) -> DateTime<Utc> {
    let mut local = day.and_time(NaiveTime::MIN);

    for _ in 0..(24 * 4) {
        if let Some(dt) = tz.from_local_datetime(&local).earliest() {
            return dt.with_timezone(&Utc);
        }
        local += Duration::minutes(15);
    }

    Utc.from_utc_datetime(&day.and_time(NaiveTime::MIN))
}

/// Last millisecond of `day` in `tz` (inclusive end of a day-keyed range).
pub fn day_end<Tz: TimeZone>(tz: &Tz, day: NaiveDate) -> DateTime<Utc> {
    match day.succ_opt() {
        Some(next) => day_start(tz, next) - Duration::milliseconds(1),
        None => DateTime::<Utc>::MAX_UTC,
    }
}

/// Split `[start, end)` into pieces that each stay inside one local day.
///
/// Walks forward one day boundary at a time, so intervals covering several
/// days are handled the same way as a single midnight crossing.
pub fn split_by_day<Tz: TimeZone>(
    tz: &Tz,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Vec<(NaiveDate, Duration)> {
    let mut out = Vec::new();
    if end <= start {
        return out;
    }

    let mut cursor = start;
    while cursor < end {
        let day = cursor.with_timezone(tz).date_naive();

        let boundary = match day.succ_opt() {
            Some(next) => day_start(tz, next),
            None => end,
        };
        let segment_end = if boundary > cursor && boundary < end {
            boundary
        } else {
            end
        };

        out.push((day, segment_end - cursor));
        cursor = segment_end;
    }

    out
}

fn credit<Tz: TimeZone>(
    totals: &mut BTreeMap<NaiveDate, i64>,
    tz: &Tz,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) {
    for (day, piece) in split_by_day(tz, start, end) {
        *totals.entry(day).or_insert(0) += piece.num_milliseconds();
    }
}

/// Per-day worked time between `range_start` and `range_end` (both inclusive).
///
/// `events_asc` must be ordered by `(occurred_at, created_at)` ascending and
/// may contain events before the range: they only decide whether a session
/// is already open when the range begins. A session still open at the end
/// is credited up to `min(now, range_end)`.
///
/// Non-alternating input is accepted: a second IN closes the running
/// interval at its own timestamp and reopens it, an OUT with nothing open
/// is ignored.
///
/// Returns one entry per calendar day of the range zone, from the day of
/// `range_start` to the day of `range_end`; an inverted range gives an
/// empty vector.
pub fn summarize<Tz: TimeZone>(
    events_asc: &[ClockEvent],
    range_start: &DateTime<Tz>,
    range_end: &DateTime<Tz>,
    now: &DateTime<Utc>,
) -> Vec<DaySummary> {
    let tz = range_start.timezone();
    let start = range_start.with_timezone(&Utc);
    let end = range_end.with_timezone(&Utc);

    if end < start {
        return Vec::new();
    }

    let mut totals: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    let mut open_since: Option<DateTime<Utc>> = None;

    for ev in events_asc {
        // -----------------------------
        // Before the range: carry state
        // -----------------------------
        if ev.occurred_at < start {
            open_since = match ev.kind {
                EventType::In => Some(ev.occurred_at),
                EventType::Out => None,
            };
            continue;
        }

        if ev.occurred_at > end {
            break;
        }

        // -----------------------------
        // Inside the range
        // -----------------------------
        match ev.kind {
            EventType::In => {
                if let Some(since) = open_since {
                    credit(&mut totals, &tz, since, ev.occurred_at);
                }
                open_since = Some(ev.occurred_at);
            }
            EventType::Out => {
                if let Some(since) = open_since.take() {
                    credit(&mut totals, &tz, since, ev.occurred_at);
                }
            }
        }
    }

    // Session still open: cap at now or at the end of the range
    if let Some(since) = open_since {
        let cap = if *now < end { *now } else { end };
        credit(&mut totals, &tz, since, cap);
    }

    let mut days = Vec::new();
    let last = range_end.date_naive();
    let mut day = range_start.date_naive();

    while day <= last {
        let ms = totals.get(&day).copied().unwrap_or(0);
        let minutes = (ms as f64 / MS_PER_MINUTE).round() as i64;
        days.push(DaySummary::from_minutes(day, minutes));

        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }

    days
}

/// Day-keyed variant: `from` and `to` are local calendar days, covered from
/// the start of `from` to the end of `to`.
pub fn summarize_days<Tz: TimeZone>(
    events_asc: &[ClockEvent],
    from: NaiveDate,
    to: NaiveDate,
    tz: &Tz,
    now: &DateTime<Utc>,
) -> Vec<DaySummary> {
    if to < from {
        return Vec::new();
    }

    let range_start = day_start(tz, from).with_timezone(tz);
    let range_end = day_end(tz, to).with_timezone(tz);

    summarize(events_asc, &range_start, &range_end, now)
}
