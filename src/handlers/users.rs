//! User listing.

use crate::error::AppError;
use crate::models::User;
use crate::state::AppState;
use axum::{extract::State, Json};

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    Ok(Json(state.repo.list_users().await?))
}
