use super::impact::print_impact;
use super::status::print_status;
use super::{open_pool, print_json};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config, json: bool) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut pool = open_pool(cfg)?;

        //
        // Preview (also fails early on unknown ids)
        //
        let impact = Core::get_deletion_impact(&mut pool, *id)?;

        if !*yes {
            print_impact(*id, &impact);

            let prompt = format!("Delete event #{}? This action is irreversible.", id);
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        //
        // Execute deletion
        //
        let result = Core::delete_event(&mut pool, *id)?;

        if json {
            return print_json(&result);
        }

        success(format!("Event #{} has been deleted.", result.deleted_id));
        print_status(&result.status);
    }

    Ok(())
}
