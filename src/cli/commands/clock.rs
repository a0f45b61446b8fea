use super::{open_pool, print_json};
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::event_type::EventType;
use crate::ui::messages::success;
use chrono::Utc;

/// `in` / `out`: a clock action at the current instant.
pub fn handle(kind: EventType, cfg: &Config, json: bool) -> AppResult<()> {
    let mut pool = open_pool(cfg)?;
    let ev = Core::record_event(&mut pool, kind, None, Utc::now())?;

    if json {
        return print_json(&ev);
    }

    let what = match kind {
        EventType::In => "Clocked in",
        EventType::Out => "Clocked out",
    };
    success(format!("{} at {} (event #{})", what, ev.get_date_time(), ev.id));
    Ok(())
}
