use super::{open_pool, print_json};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::event_type::EventType;
use crate::ui::messages::success;
use crate::utils::time::parse_timestamp;
use chrono::Utc;

pub fn handle(cmd: &Commands, cfg: &Config, json: bool) -> AppResult<()> {
    if let Commands::Edit { id, kind, at } = cmd {
        let kind = EventType::parse(kind)?;
        let occurred_at = parse_timestamp(at)?;

        let mut pool = open_pool(cfg)?;
        let ev = Core::update_event(&mut pool, *id, kind, occurred_at, Utc::now())?;

        if json {
            return print_json(&ev);
        }

        success(format!(
            "Event #{} is now {} at {}",
            ev.id,
            ev.kind,
            ev.get_date_time()
        ));
    }

    Ok(())
}
