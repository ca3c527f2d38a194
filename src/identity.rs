//! Current-user resolution without authentication: query, then header, then the first user in the store.

use crate::error::AppError;
use crate::extractors::RequestedUser;
use crate::models::User;
use crate::store::Repository;

/// Pick the acting user id. The returned id is not checked for existence.
pub async fn resolve_user_id(repo: &dyn Repository, requested: RequestedUser) -> Result<i64, AppError> {
    if let RequestedUser(Some(id)) = requested {
        return Ok(id);
    }
    repo.first_user_id().await?.ok_or(AppError::NoUsers)
}

pub async fn ensure_user_exists(repo: &dyn Repository, user_id: i64) -> Result<User, AppError> {
    repo.get_user(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} no existe.", user_id)))
}

/// Resolve and verify in one step.
pub async fn current_user(repo: &dyn Repository, requested: RequestedUser) -> Result<User, AppError> {
    let user_id = resolve_user_id(repo, requested).await?;
    ensure_user_exists(repo, user_id).await
}
