use crate::core::calculator::status::status_of;
use crate::errors::{AppError, AppResult};
use crate::models::event::ClockEvent;
use crate::models::status::DeletionImpact;

/// Simulate the removal of event `id` and compare the resulting status with
/// the current one. Nothing is removed from `events`.
pub fn impact_of_deleting(events: &[ClockEvent], id: i64) -> AppResult<DeletionImpact> {
    if !events.iter().any(|e| e.id == id) {
        return Err(AppError::NotFound(id));
    }

    let current_status = status_of(events);

    let remaining: Vec<ClockEvent> = events.iter().filter(|e| e.id != id).cloned().collect();
    let next_status = status_of(&remaining);

    Ok(DeletionImpact {
        will_change_status: current_status.clocked_in != next_status.clocked_in,
        current_status,
        next_status,
    })
}
