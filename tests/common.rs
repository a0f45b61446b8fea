#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, TimeZone, Utc};
use rclocklog::db::initialize::init_db;
use rclocklog::db::pool::DbPool;
use rclocklog::models::event::ClockEvent;
use rclocklog::models::event_type::EventType;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rcl() -> Command {
    cargo_bin_cmd!("rclocklog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rclocklog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Init a fresh DB through the CLI (test mode: no config file written)
pub fn init_test_db(name: &str) -> String {
    let db_path = setup_test_db(name);
    rcl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    db_path
}

/// In-memory store with the schema in place
pub fn memory_pool() -> DbPool {
    let pool = DbPool::in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("init db");
    pool
}

/// UTC instant shortcut
pub fn at(y: i32, m: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, mi, 0).unwrap()
}

/// Event whose created_at equals occurred_at
pub fn event(id: i64, kind: EventType, occurred_at: DateTime<Utc>) -> ClockEvent {
    ClockEvent {
        id,
        kind,
        occurred_at,
        created_at: occurred_at,
    }
}

pub fn minutes_per_day(days: &[rclocklog::models::day_summary::DaySummary]) -> Vec<i64> {
    days.iter().map(|d| d.total_minutes).collect()
}
