use super::{open_pool, print_json};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::event_type::EventType;
use crate::ui::messages::success;
use crate::utils::time::parse_optional_timestamp;
use chrono::Utc;

/// Record an event, either now (clock action) or at a past instant (manual).
pub fn handle(cmd: &Commands, cfg: &Config, json: bool) -> AppResult<()> {
    if let Commands::Add { kind, at } = cmd {
        //
        // 1. Parse type and timestamp before touching the DB
        //
        let kind = EventType::parse(kind)?;
        let occurred_at = parse_optional_timestamp(at.as_ref())?;

        //
        // 2. Execute logic
        //
        let mut pool = open_pool(cfg)?;
        let ev = Core::record_event(&mut pool, kind, occurred_at, Utc::now())?;

        if json {
            return print_json(&ev);
        }

        success(format!(
            "Recorded {} at {} (event #{})",
            ev.kind,
            ev.get_date_time(),
            ev.id
        ));
    }

    Ok(())
}
