//! Formatting utilities used for CLI outputs.

use chrono::{Datelike, NaiveDate};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 && want_sign {
        "-"
    } else {
        "" // zero → no sign
    };

    if short {
        // e.g. +02:25 or -01:10
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        // e.g. +02h 25m or -01h 10m
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Hours with two decimals, as shown next to each day.
pub fn hours2readable(hours: f64) -> String {
    format!("{:.2}h", hours)
}

/// Date label according to the `show_weekday` config value
/// (`None`, `Short` → "Mon", `Long` → "Monday").
pub fn date_label(date: &NaiveDate, show_weekday: &str) -> String {
    let ymd = date.format("%Y-%m-%d").to_string();
    match show_weekday.to_lowercase().as_str() {
        "short" => format!("{} {}", ymd, date.weekday()),
        "long" => format!("{} {}", ymd, date.format("%A")),
        _ => ymd,
    }
}
