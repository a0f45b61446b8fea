//! rClocklog library root.
//! Exposes the CLI parser, the high-level run() function, the clock engine
//! and its SQLite store.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use models::event_type::EventType;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let json = cli.json;

    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Status => cli::commands::status::handle(cfg, json),
        Commands::In => cli::commands::clock::handle(EventType::In, cfg, json),
        Commands::Out => cli::commands::clock::handle(EventType::Out, cfg, json),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg, json),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg, json),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, cfg, json),
        Commands::Impact { id } => cli::commands::impact::handle(*id, cfg, json),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg, json),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg, json),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command line DB override
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    // 4️⃣ hand over to the dispatcher
    dispatch(&cli, &cfg)
}
