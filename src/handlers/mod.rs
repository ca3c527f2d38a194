//! HTTP handlers for reference data, users and favorites.

pub mod catalog;
pub mod favorites;
pub mod users;
pub use catalog::*;
pub use favorites::*;
pub use users::*;

use crate::error::AppError;

/// Path ids must be plain integers; anything else matches no row.
fn parse_id(raw: &str, not_found: &str) -> Result<i64, AppError> {
    crate::extractors::parse_numeric_id(raw).ok_or_else(|| AppError::NotFound(not_found.to_string()))
}
