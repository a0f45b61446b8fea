use crate::core::calculator::impact::impact_of_deleting;
use crate::core::calculator::status::derive_status;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_event, find_event, latest_event, load_all_events_desc};
use crate::errors::{AppError, AppResult};
use crate::models::status::{DeleteResult, DeletionImpact};
use rusqlite::TransactionBehavior;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Read-only: what would happen to the status if `id` were deleted.
    pub fn impact(pool: &mut DbPool, id: i64) -> AppResult<DeletionImpact> {
        let events = load_all_events_desc(&pool.conn)?;
        impact_of_deleting(&events, id)
    }

    /// Delete event `id` and return the status derived from what is left.
    pub fn apply(pool: &mut DbPool, id: i64) -> AppResult<DeleteResult> {
        let tx = pool.conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let existing = find_event(&tx, id)?.ok_or(AppError::NotFound(id))?;

        delete_event(&tx, id)?;
        ttlog(
            &tx,
            "del",
            &id.to_string(),
            &format!("Deleted {} at {}", existing.kind, existing.get_date_time()),
        )?;

        let status = derive_status(latest_event(&tx)?.as_slice());

        tx.commit()?;

        Ok(DeleteResult {
            deleted_id: id,
            status,
        })
    }
}
