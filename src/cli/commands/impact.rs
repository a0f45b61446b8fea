use super::{open_pool, print_json};
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::status::DeletionImpact;
use crate::ui::messages::{info, warning};

pub fn handle(id: i64, cfg: &Config, json: bool) -> AppResult<()> {
    let mut pool = open_pool(cfg)?;
    let impact = Core::get_deletion_impact(&mut pool, id)?;

    if json {
        return print_json(&impact);
    }

    print_impact(id, &impact);
    Ok(())
}

pub fn print_impact(id: i64, impact: &DeletionImpact) {
    if impact.will_change_status {
        warning(format!(
            "Deleting event #{} will change your status from {} to {}.",
            id,
            impact.current_status.label(),
            impact.next_status.label()
        ));
    } else {
        info(format!(
            "Deleting event #{} keeps your status {}.",
            id,
            impact.current_status.label()
        ));
    }
}
