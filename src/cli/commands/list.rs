use super::{open_pool, print_json};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::models::event::ClockEvent;
use crate::ui::messages::info;
use crate::utils::colors::colorize_in_out;
use crate::utils::date;
use crate::utils::table::{Column, Table};
use chrono::{Local, NaiveDate};

fn parse_bound(value: &Option<String>) -> AppResult<Option<NaiveDate>> {
    match value {
        Some(s) => date::parse_date(s.trim())
            .map(Some)
            .ok_or_else(|| AppError::RangeMalformed(s.clone())),
        None => Ok(None),
    }
}

pub fn handle(cmd: &Commands, cfg: &Config, json: bool) -> AppResult<()> {
    if let Commands::List { from, to } = cmd {
        let from = parse_bound(from)?;
        let to = parse_bound(to)?;

        let mut pool = open_pool(cfg)?;
        let events = Core::list_events(&mut pool, from, to, &Local)?;

        if json {
            return print_json(&events);
        }

        if events.is_empty() {
            info("No events found.");
            return Ok(());
        }

        print_events(&events);
    }

    Ok(())
}

fn print_events(events: &[ClockEvent]) {
    let mut table = Table::new(vec![
        Column::new("ID", 6),
        Column::new("TYPE", 4),
        Column::new("OCCURRED AT", 19),
        Column::new("CREATED AT", 19),
    ]);

    for ev in events {
        table.add_row(vec![
            ev.id.to_string(),
            ev.kind.to_string(),
            ev.get_date_time(),
            ev.created_at
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
        ]);
    }

    let rendered = table.render();
    for (i, line) in rendered.lines().enumerate() {
        // row 0 is the header
        match i.checked_sub(1).and_then(|idx| events.get(idx)) {
            Some(ev) => println!("{}", colorize_in_out(line, ev.kind.is_in())),
            None => println!("{}", line),
        }
    }
}
