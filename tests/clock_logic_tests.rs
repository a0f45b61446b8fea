use chrono::{Duration, FixedOffset, NaiveDate, Utc};
use rclocklog::core::clock::ClockLogic;
use rclocklog::core::logic::Core;
use rclocklog::core::summary::SummaryLogic;
use rclocklog::db::initialize::init_db;
use rclocklog::db::log::load_log;
use rclocklog::db::pool::DbPool;
use rclocklog::db::queries::{count_events, find_event};
use rclocklog::errors::AppError;
use rclocklog::models::event_type::EventType;

use std::sync::{Arc, Barrier};
use std::thread;

mod common;
use common::{at, memory_pool, minutes_per_day, setup_test_db};

fn audit_ops(pool: &DbPool) -> Vec<String> {
    load_log(&pool.conn)
        .unwrap()
        .into_iter()
        .map(|(_, _, op, _, _)| op)
        .filter(|op| op != "migration_applied")
        .collect()
}

#[test]
fn test_clock_in_then_out_alternates_status() {
    let mut pool = memory_pool();
    let t0 = at(2025, 3, 3, 9, 0);

    assert!(!Core::get_status(&mut pool).unwrap().clocked_in);

    let ev = ClockLogic::clock_in(&mut pool, t0).unwrap();
    assert!(ev.id > 0);
    assert_eq!(ev.kind, EventType::In);
    assert_eq!(ev.occurred_at, t0);
    assert_eq!(ev.created_at, t0);

    let status = Core::get_status(&mut pool).unwrap();
    assert!(status.clocked_in);
    assert_eq!(status.last_event.map(|e| e.id), Some(ev.id));

    ClockLogic::clock_out(&mut pool, t0 + Duration::hours(3)).unwrap();
    assert!(!Core::get_status(&mut pool).unwrap().clocked_in);
}

#[test]
fn test_clock_in_twice_is_rejected_without_writing() {
    let mut pool = memory_pool();
    let t0 = at(2025, 3, 3, 9, 0);

    ClockLogic::clock_in(&mut pool, t0).unwrap();
    let err = ClockLogic::clock_in(&mut pool, t0 + Duration::minutes(5)).unwrap_err();

    assert!(matches!(err, AppError::AlreadyInDesiredState(_)));
    assert_eq!(err.to_string(), "Already clocked in.");
    assert_eq!(count_events(&pool.conn).unwrap(), 1);
    assert_eq!(audit_ops(&pool), vec!["clock_in"]);
}

#[test]
fn test_concurrent_clock_in_records_a_single_event() {
    const WORKERS: usize = 8;

    let db_path = setup_test_db("concurrent_clock_in");
    {
        let pool = DbPool::new(&db_path).unwrap();
        init_db(&pool.conn).unwrap();
    }

    let barrier = Arc::new(Barrier::new(WORKERS));
    let now = Utc::now();

    let handles: Vec<_> = (0..WORKERS)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            let db_path = db_path.clone();
            thread::spawn(move || {
                let mut pool = DbPool::new(&db_path).unwrap();
                barrier.wait();
                ClockLogic::clock_in(&mut pool, now)
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1);
    assert!(
        results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(|e| matches!(e, AppError::AlreadyInDesiredState(_)))
    );

    let pool = DbPool::new(&db_path).unwrap();
    assert_eq!(count_events(&pool.conn).unwrap(), 1);
    assert_eq!(audit_ops(&pool), vec!["clock_in"]);

    std::fs::remove_file(&db_path).ok();
}

#[test]
fn test_returned_event_matches_stored_event() {
    let mut pool = memory_pool();
    let now = at(2025, 3, 3, 9, 0) + Duration::nanoseconds(123_456_789);

    let ev = ClockLogic::clock_in(&mut pool, now).unwrap();
    assert_eq!(ev.occurred_at, at(2025, 3, 3, 9, 0) + Duration::microseconds(123_456));
    assert_eq!(find_event(&pool.conn, ev.id).unwrap(), Some(ev));

    let manual = ClockLogic::add_manual(
        &mut pool,
        EventType::Out,
        at(2025, 3, 3, 8, 0) + Duration::nanoseconds(999),
        now,
    )
    .unwrap();
    assert_eq!(find_event(&pool.conn, manual.id).unwrap(), Some(manual.clone()));

    let edited = Core::update_event(
        &mut pool,
        manual.id,
        EventType::In,
        at(2025, 3, 3, 7, 0) + Duration::nanoseconds(1_500),
        now,
    )
    .unwrap();
    assert_eq!(find_event(&pool.conn, manual.id).unwrap(), Some(edited));
}

#[test]
fn test_clock_out_on_empty_log_is_rejected() {
    let mut pool = memory_pool();

    let err = ClockLogic::clock_out(&mut pool, at(2025, 3, 3, 9, 0)).unwrap_err();

    assert_eq!(err.to_string(), "Already clocked out.");
    assert_eq!(count_events(&pool.conn).unwrap(), 0);
    assert!(audit_ops(&pool).is_empty());
}

#[test]
fn test_manual_event_must_be_in_the_past() {
    let mut pool = memory_pool();
    let now = at(2025, 3, 3, 9, 0);

    let just_after = now + Duration::milliseconds(1);
    let err = Core::record_event(&mut pool, EventType::In, Some(just_after), now).unwrap_err();
    assert!(matches!(err, AppError::InvalidTimestamp(_)));

    let err = Core::record_event(&mut pool, EventType::In, Some(now), now).unwrap_err();
    assert!(matches!(err, AppError::InvalidTimestamp(_)));

    assert_eq!(count_events(&pool.conn).unwrap(), 0);
}

#[test]
fn test_manual_event_skips_alternation_check() {
    let mut pool = memory_pool();
    let now = at(2025, 3, 3, 12, 0);

    ClockLogic::clock_in(&mut pool, at(2025, 3, 3, 8, 0)).unwrap();

    // a second IN is allowed when given an explicit timestamp
    let manual =
        Core::record_event(&mut pool, EventType::In, Some(at(2025, 3, 3, 10, 0)), now).unwrap();
    assert_eq!(manual.created_at, now);
    assert_eq!(count_events(&pool.conn).unwrap(), 2);

    // the clock action still sees the derived state
    let err = Core::record_event(&mut pool, EventType::In, None, now).unwrap_err();
    assert!(matches!(err, AppError::AlreadyInDesiredState(_)));

    assert_eq!(audit_ops(&pool), vec!["clock_in", "add"]);
}

#[test]
fn test_backdated_event_does_not_change_status_when_older() {
    let mut pool = memory_pool();
    let now = at(2025, 3, 3, 12, 0);

    ClockLogic::clock_in(&mut pool, at(2025, 3, 3, 9, 0)).unwrap();
    ClockLogic::add_manual(&mut pool, EventType::Out, at(2025, 3, 2, 18, 0), now).unwrap();

    assert!(Core::get_status(&mut pool).unwrap().clocked_in);

    let ids: Vec<i64> = Core::list_events(&mut pool, None, None, &Utc)
        .unwrap()
        .into_iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(ids, vec![2, 1]);
}

#[test]
fn test_delete_latest_in_clocks_out() {
    let mut pool = memory_pool();
    let ev = ClockLogic::clock_in(&mut pool, at(2025, 3, 3, 9, 0)).unwrap();

    let impact = Core::get_deletion_impact(&mut pool, ev.id).unwrap();
    assert!(impact.will_change_status);
    assert!(!impact.next_status.clocked_in);

    let res = Core::delete_event(&mut pool, ev.id).unwrap();
    assert_eq!(res.deleted_id, ev.id);
    assert!(!res.status.clocked_in);
    assert!(res.status.last_event.is_none());

    assert!(find_event(&pool.conn, ev.id).unwrap().is_none());
    assert_eq!(audit_ops(&pool), vec!["clock_in", "del"]);
}

#[test]
fn test_delete_unknown_event_is_not_found() {
    let mut pool = memory_pool();
    ClockLogic::clock_in(&mut pool, at(2025, 3, 3, 9, 0)).unwrap();

    assert!(matches!(
        Core::delete_event(&mut pool, 999).unwrap_err(),
        AppError::NotFound(999)
    ));
    assert!(matches!(
        Core::get_deletion_impact(&mut pool, 999).unwrap_err(),
        AppError::NotFound(999)
    ));
    assert_eq!(count_events(&pool.conn).unwrap(), 1);
}

#[test]
fn test_edit_replaces_type_and_time_only() {
    let mut pool = memory_pool();
    let created = at(2025, 3, 3, 9, 0);
    let now = at(2025, 3, 3, 18, 0);

    let ev = ClockLogic::clock_in(&mut pool, created).unwrap();
    let edited =
        Core::update_event(&mut pool, ev.id, EventType::Out, at(2025, 3, 3, 8, 30), now).unwrap();

    assert_eq!(edited.id, ev.id);
    assert_eq!(edited.created_at, created);
    assert_eq!(edited.kind, EventType::Out);

    let stored = find_event(&pool.conn, ev.id).unwrap().unwrap();
    assert_eq!(stored, edited);
    assert!(!Core::get_status(&mut pool).unwrap().clocked_in);
    assert_eq!(audit_ops(&pool), vec!["clock_in", "edit"]);
}

#[test]
fn test_edit_errors() {
    let mut pool = memory_pool();
    let now = at(2025, 3, 3, 18, 0);
    let ev = ClockLogic::clock_in(&mut pool, at(2025, 3, 3, 9, 0)).unwrap();

    assert!(matches!(
        Core::update_event(&mut pool, 42, EventType::In, at(2025, 3, 3, 8, 0), now).unwrap_err(),
        AppError::NotFound(42)
    ));
    assert!(matches!(
        Core::update_event(&mut pool, ev.id, EventType::In, now + Duration::hours(1), now)
            .unwrap_err(),
        AppError::InvalidTimestamp(_)
    ));

    let stored = find_event(&pool.conn, ev.id).unwrap().unwrap();
    assert_eq!(stored.occurred_at, at(2025, 3, 3, 9, 0));
}

#[test]
fn test_summary_over_stored_events() {
    let mut pool = memory_pool();
    let now = at(2025, 3, 10, 0, 0);

    for (kind, t) in [
        (EventType::In, at(2025, 3, 3, 9, 0)),
        (EventType::Out, at(2025, 3, 3, 12, 0)),
        (EventType::In, at(2025, 3, 3, 13, 0)),
        (EventType::Out, at(2025, 3, 3, 17, 0)),
        (EventType::In, at(2025, 3, 4, 22, 0)),
        (EventType::Out, at(2025, 3, 5, 0, 30)),
    ] {
        ClockLogic::add_manual(&mut pool, kind, t, now).unwrap();
    }

    let from = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
    let to = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
    let report = SummaryLogic::build(&mut pool, from, to, &Utc, now).unwrap();

    assert_eq!(report.range.from, from);
    assert_eq!(report.range.to, to);
    assert_eq!(minutes_per_day(&report.days), vec![420, 120, 30]);
    assert_eq!(report.days[0].total_hours, 7.0);
    assert_eq!(report.total_minutes(), 570);

    // an event after the range does not leak in
    let report = Core::get_summary(&mut pool, from, from, &Utc, now).unwrap();
    assert_eq!(minutes_per_day(&report.days), vec![420]);
}

#[test]
fn test_parse_range_errors() {
    assert!(matches!(
        SummaryLogic::parse_range(None, Some("2025-03-01")),
        Err(AppError::RangeRequired)
    ));
    assert!(matches!(
        SummaryLogic::parse_range(Some(" "), Some("2025-03-01")),
        Err(AppError::RangeRequired)
    ));
    assert!(matches!(
        SummaryLogic::parse_range(Some("2025-13-01"), Some("2025-03-01")),
        Err(AppError::RangeMalformed(_))
    ));

    let (from, to) = SummaryLogic::parse_range(Some("2025-03-01"), Some("2025-03-07")).unwrap();
    assert_eq!(from, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
    assert_eq!(to, NaiveDate::from_ymd_opt(2025, 3, 7).unwrap());
}

#[test]
fn test_list_events_bounds_are_inclusive_days() {
    let mut pool = memory_pool();
    let now = at(2025, 3, 10, 0, 0);

    for (kind, t) in [
        (EventType::In, at(2025, 3, 1, 23, 59)),
        (EventType::Out, at(2025, 3, 2, 0, 0)),
        (EventType::In, at(2025, 3, 2, 23, 59)),
        (EventType::Out, at(2025, 3, 3, 8, 0)),
    ] {
        ClockLogic::add_manual(&mut pool, kind, t, now).unwrap();
    }

    let day = |d| NaiveDate::from_ymd_opt(2025, 3, d).unwrap();

    let all = Core::list_events(&mut pool, None, None, &Utc).unwrap();
    assert_eq!(all.len(), 4);
    assert!(all.windows(2).all(|w| w[0].occurred_at <= w[1].occurred_at));

    let only_2nd = Core::list_events(&mut pool, Some(day(2)), Some(day(2)), &Utc).unwrap();
    assert_eq!(only_2nd.len(), 2);

    let since_2nd = Core::list_events(&mut pool, Some(day(2)), None, &Utc).unwrap();
    assert_eq!(since_2nd.len(), 3);

    // in +02:00 the first event already belongs to March 2nd
    let tz = FixedOffset::east_opt(2 * 3600).unwrap();
    let only_2nd = Core::list_events(&mut pool, Some(day(2)), Some(day(2)), &tz).unwrap();
    assert_eq!(only_2nd.len(), 2);
    assert_eq!(only_2nd[0].occurred_at, at(2025, 3, 1, 23, 59));
}

#[test]
fn test_event_type_parsing() {
    assert_eq!(EventType::parse("in").unwrap(), EventType::In);
    assert_eq!(EventType::parse(" OUT ").unwrap(), EventType::Out);
    assert!(matches!(
        EventType::parse("lunch"),
        Err(AppError::InvalidTimestamp(_))
    ));
    assert_eq!(EventType::from_db_str("in"), None);
}
