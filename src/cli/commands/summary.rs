use super::{open_pool, print_json};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::summary::SummaryLogic;
use crate::errors::{AppError, AppResult};
use crate::models::day_summary::SummaryReport;
use crate::ui::messages::{header, warning};
use crate::utils::colors::colorize_optional;
use crate::utils::date;
use crate::utils::formatting::{bold, date_label, hours2readable, mins2readable};
use chrono::{Local, NaiveDate, Utc};

/// Explicit --from/--to win over --week and --period.
fn resolve_range(
    from: &Option<String>,
    to: &Option<String>,
    period: &Option<String>,
    week: &Option<Option<String>>,
) -> AppResult<(NaiveDate, NaiveDate)> {
    if from.is_none() && to.is_none() {
        if let Some(anchor) = week {
            let day = match anchor {
                Some(s) => date::parse_date(s.trim())
                    .ok_or_else(|| AppError::RangeMalformed(s.clone()))?,
                None => date::today(),
            };
            return Ok(date::week_bounds(day));
        }

        if let Some(p) = period {
            return date::resolve_period(p).map_err(|_| AppError::RangeMalformed(p.clone()));
        }
    }

    SummaryLogic::parse_range(from.as_deref(), to.as_deref())
}

pub fn handle(cmd: &Commands, cfg: &Config, json: bool) -> AppResult<()> {
    if let Commands::Summary {
        from,
        to,
        period,
        week,
    } = cmd
    {
        let (from_d, to_d) = resolve_range(from, to, period, week)?;

        let mut pool = open_pool(cfg)?;
        let report = Core::get_summary(&mut pool, from_d, to_d, &Local, Utc::now())?;

        if json {
            return print_json(&report);
        }

        print_report(&report, cfg);
    }

    Ok(())
}

fn print_report(report: &SummaryReport, cfg: &Config) {
    header(format!("{} → {}", report.range.from, report.range.to));

    if report.days.is_empty() {
        warning("Empty range: 'from' is after 'to'.");
        return;
    }

    for day in &report.days {
        println!(
            "{:<24} {:>8}  {}",
            date_label(&day.date, &cfg.show_weekday),
            colorize_optional(&mins2readable(day.total_minutes, false, false)),
            hours2readable(day.total_hours)
        );
    }

    let sep = cfg.separator_char.chars().next().unwrap_or('-');
    println!("{}", sep.to_string().repeat(44));

    let total = report.total_minutes();
    println!(
        "{:<24} {:>8}  {}",
        bold("TOTAL"),
        mins2readable(total, false, false),
        hours2readable(total as f64 / 60.0)
    );
}
