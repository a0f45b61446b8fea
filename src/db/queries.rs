use crate::errors::{AppError, AppResult};
use crate::models::event::ClockEvent;
use crate::models::event_type::EventType;
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const ORDER_ASC: &str = "ORDER BY occurred_at ASC, created_at ASC, id ASC";
const ORDER_DESC: &str = "ORDER BY occurred_at DESC, created_at DESC, id DESC";

/// Timestamp → DB string (UTC, fixed width, sortable as text).
pub fn format_ts(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// DB string → timestamp
pub fn parse_ts(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, rusqlite::types::Type::Text, Box::new(err))
}

pub fn map_row(row: &Row) -> Result<ClockEvent> {
    let kind_str: String = row.get("kind")?;
    let kind = EventType::from_db_str(&kind_str).ok_or_else(|| {
        conversion_error(1, AppError::Other(format!("Invalid kind: {}", kind_str)))
    })?;

    let occurred_str: String = row.get("occurred_at")?;
    let occurred_at = parse_ts(&occurred_str)
        .ok_or_else(|| conversion_error(2, AppError::InvalidDate(occurred_str.clone())))?;

    let created_str: String = row.get("created_at")?;
    let created_at = parse_ts(&created_str)
        .ok_or_else(|| conversion_error(3, AppError::InvalidDate(created_str.clone())))?;

    Ok(ClockEvent {
        id: row.get("id")?,
        kind,
        occurred_at,
        created_at,
    })
}

fn collect_events(
    conn: &Connection,
    sql: &str,
    args: &[&dyn rusqlite::ToSql],
) -> AppResult<Vec<ClockEvent>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(args, map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Full log, newest first.
pub fn load_all_events_desc(conn: &Connection) -> AppResult<Vec<ClockEvent>> {
    collect_events(conn, &format!("SELECT * FROM clock_events {ORDER_DESC}"), &[])
}

/// Every event up to `end` (inclusive), oldest first.
///
/// Earlier events are kept on purpose: the aggregator needs them to know
/// whether a session is already open when the range starts.
pub fn load_events_until(conn: &Connection, end: &DateTime<Utc>) -> AppResult<Vec<ClockEvent>> {
    let end_s = format_ts(end);
    collect_events(
        conn,
        &format!("SELECT * FROM clock_events WHERE occurred_at <= ?1 {ORDER_ASC}"),
        &[&end_s],
    )
}

/// Events with `from <= occurred_at <= to`; either bound may be open.
pub fn load_events_between(
    conn: &Connection,
    from: Option<&DateTime<Utc>>,
    to: Option<&DateTime<Utc>>,
) -> AppResult<Vec<ClockEvent>> {
    let from_s = from.map(format_ts);
    let to_s = to.map(format_ts);

    collect_events(
        conn,
        &format!(
            "SELECT * FROM clock_events
             WHERE (?1 IS NULL OR occurred_at >= ?1)
               AND (?2 IS NULL OR occurred_at <= ?2)
             {ORDER_ASC}"
        ),
        &[&from_s, &to_s],
    )
}

/// Most recent event, if any.
pub fn latest_event(conn: &Connection) -> AppResult<Option<ClockEvent>> {
    let ev = conn
        .query_row(
            &format!("SELECT * FROM clock_events {ORDER_DESC} LIMIT 1"),
            [],
            map_row,
        )
        .optional()?;
    Ok(ev)
}

/// Oldest event, if any.
pub fn first_event(conn: &Connection) -> AppResult<Option<ClockEvent>> {
    let ev = conn
        .query_row(
            &format!("SELECT * FROM clock_events {ORDER_ASC} LIMIT 1"),
            [],
            map_row,
        )
        .optional()?;
    Ok(ev)
}

pub fn find_event(conn: &Connection, id: i64) -> AppResult<Option<ClockEvent>> {
    let ev = conn
        .query_row("SELECT * FROM clock_events WHERE id = ?1", [id], map_row)
        .optional()?;
    Ok(ev)
}

/// Insert `ev` and return it with the id assigned by SQLite.
pub fn insert_event(conn: &Connection, ev: &ClockEvent) -> AppResult<ClockEvent> {
    conn.execute(
        "INSERT INTO clock_events (kind, occurred_at, created_at)
         VALUES (?1, ?2, ?3)",
        params![
            ev.kind.to_db_str(),
            format_ts(&ev.occurred_at),
            format_ts(&ev.created_at),
        ],
    )?;

    Ok(ClockEvent {
        id: conn.last_insert_rowid(),
        ..ev.clone()
    })
}

/// Replace kind and occurred_at of an event (id and created_at are kept).
pub fn update_event(conn: &Connection, ev: &ClockEvent) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE clock_events
         SET kind = ?1, occurred_at = ?2
         WHERE id = ?3",
        params![ev.kind.to_db_str(), format_ts(&ev.occurred_at), ev.id],
    )?;
    Ok(n)
}

pub fn delete_event(conn: &Connection, id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM clock_events WHERE id = ?1", [id])?;
    Ok(n)
}

pub fn count_events(conn: &Connection) -> AppResult<i64> {
    let n = conn.query_row("SELECT COUNT(*) FROM clock_events", [], |row| row.get(0))?;
    Ok(n)
}
