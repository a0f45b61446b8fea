pub mod add;
pub mod clock;
pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod impact;
pub mod init;
pub mod list;
pub mod log;
pub mod status;
pub mod summary;

use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use serde::Serialize;

/// Open the configured database, creating the schema if needed.
pub(crate) fn open_pool(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database_path())?;
    init_db(&pool.conn)?;
    Ok(pool)
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
