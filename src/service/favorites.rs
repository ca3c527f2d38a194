//! Favorite lifecycle: created on first add, returned unchanged on repeat adds, destroyed on delete.

use crate::error::AppError;
use crate::models::{Favorite, FavoriteView, Target};
use crate::store::Repository;

/// Result of an add request.
#[derive(Clone, Debug, PartialEq)]
pub enum AddOutcome {
    Created(Favorite),
    AlreadyExists(Favorite),
}

impl AddOutcome {
    pub fn favorite(&self) -> &Favorite {
        match self {
            AddOutcome::Created(f) | AddOutcome::AlreadyExists(f) => f,
        }
    }
}

pub struct FavoritesService;

impl FavoritesService {
    /// Favorites of `user_id` ascending by id, each with its Pokémon or region inlined.
    pub async fn list(repo: &dyn Repository, user_id: i64) -> Result<Vec<FavoriteView>, AppError> {
        let favorites = repo.list_favorites(user_id).await?;
        let mut out = Vec::with_capacity(favorites.len());
        for favorite in favorites {
            let (pokemon, region) = match favorite.target {
                Target::Pokemon(id) => (Some(repo.get_pokemon(id).await?), None),
                Target::Region(id) => (None, Some(repo.get_region(id).await?)),
            };
            out.push(FavoriteView {
                favorite: favorite.into(),
                pokemon,
                region,
            });
        }
        Ok(out)
    }

    /// Add `target` to the favorites of an existing user. The target must exist.
    pub async fn add(repo: &dyn Repository, user_id: i64, target: Target) -> Result<AddOutcome, AppError> {
        Self::ensure_target_exists(repo, target).await?;

        if let Some(existing) = repo.find_favorite(user_id, target).await? {
            return Ok(AddOutcome::AlreadyExists(existing));
        }
        match repo.insert_favorite(user_id, target).await? {
            Some(created) => {
                tracing::info!(user_id, favorite_id = created.id, ?target, "favorite created");
                Ok(AddOutcome::Created(created))
            }
            // Lost a race with a concurrent add; the store kept the other row.
            None => repo
                .find_favorite(user_id, target)
                .await?
                .map(AddOutcome::AlreadyExists)
                .ok_or_else(|| {
                    AppError::Integrity(format!(
                        "favorite insert for user {} was rejected but no row exists",
                        user_id
                    ))
                }),
        }
    }

    /// Remove `target` from the favorites of `user_id`. Returns the deleted favorite.
    pub async fn remove(repo: &dyn Repository, user_id: i64, target: Target) -> Result<Favorite, AppError> {
        let favorite = repo
            .find_favorite(user_id, target)
            .await?
            .ok_or_else(|| AppError::NotFound(target.not_favorited_message().to_string()))?;
        if !repo.delete_favorite(favorite.id).await? {
            return Err(AppError::NotFound(target.not_favorited_message().to_string()));
        }
        tracing::info!(user_id, favorite_id = favorite.id, ?target, "favorite removed");
        Ok(favorite)
    }

    async fn ensure_target_exists(repo: &dyn Repository, target: Target) -> Result<(), AppError> {
        let exists = match target {
            Target::Pokemon(id) => repo.get_pokemon(id).await?.is_some(),
            Target::Region(id) => repo.get_region(id).await?.is_some(),
        };
        if exists {
            Ok(())
        } else {
            Err(AppError::NotFound(target.not_found_message().to_string()))
        }
    }
}
