use chrono::NaiveDate;
use serde::Serialize;

/// Worked time credited to one local calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    pub date: NaiveDate,
    pub total_minutes: i64,
    pub total_hours: f64,
}

impl DaySummary {
    pub fn from_minutes(date: NaiveDate, total_minutes: i64) -> Self {
        let hours = total_minutes as f64 / 60.0;
        Self {
            date,
            total_minutes,
            total_hours: (hours * 100.0).round() / 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// Result of a summary query: the requested range plus one entry per day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    pub range: DateRange,
    pub days: Vec<DaySummary>,
}

impl SummaryReport {
    pub fn total_minutes(&self) -> i64 {
        self.days.iter().map(|d| d.total_minutes).sum()
    }
}
