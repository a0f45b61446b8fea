use super::{open_pool, print_json};
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::status::Status;
use crate::ui::messages::info;
use crate::utils::colors::{GREEN, RED, RESET};

pub fn handle(cfg: &Config, json: bool) -> AppResult<()> {
    let mut pool = open_pool(cfg)?;
    let status = Core::get_status(&mut pool)?;

    if json {
        return print_json(&status);
    }

    print_status(&status);
    Ok(())
}

pub fn print_status(status: &Status) {
    match &status.last_event {
        None => info("No events recorded yet: clocked OUT."),
        Some(ev) if status.clocked_in => {
            println!(
                "{}● Clocked IN{} since {} (event #{})",
                GREEN,
                RESET,
                ev.get_date_time(),
                ev.id
            );
        }
        Some(ev) => {
            println!(
                "{}○ Clocked OUT{} since {} (event #{})",
                RED,
                RESET,
                ev.get_date_time(),
                ev.id
            );
        }
    }
}
