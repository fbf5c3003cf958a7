//! HTTP route handlers.

pub mod assignments;
pub mod engineers;
pub mod health;
pub mod projects;

use roster_core::Id;

use crate::error::AppError;

/// Parse a path segment as an entity id.
fn parse_id(raw: &str) -> Result<Id, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id: {raw}")))
}
