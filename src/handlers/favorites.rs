//! Favorite handlers for the current user. Pokémon and region routes share one implementation per verb.

use super::parse_id;
use crate::error::AppError;
use crate::extractors::RequestedUser;
use crate::identity::current_user;
use crate::models::{FavoriteView, Target, POKEMON_NOT_FOUND, REGION_NOT_FOUND};
use crate::response::{message, Message};
use crate::service::{AddOutcome, FavoritesService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

pub async fn list_favorites(
    State(state): State<AppState>,
    requested: RequestedUser,
) -> Result<Json<Vec<FavoriteView>>, AppError> {
    let user = current_user(state.repo.as_ref(), requested).await?;
    Ok(Json(FavoritesService::list(state.repo.as_ref(), user.id).await?))
}

async fn add(state: &AppState, requested: RequestedUser, target: Target) -> Result<AddOutcome, AppError> {
    let user = current_user(state.repo.as_ref(), requested).await?;
    FavoritesService::add(state.repo.as_ref(), user.id, target).await
}

async fn remove(
    state: &AppState,
    requested: RequestedUser,
    target: Target,
) -> Result<(StatusCode, Json<Message>), AppError> {
    let user = current_user(state.repo.as_ref(), requested).await?;
    FavoritesService::remove(state.repo.as_ref(), user.id, target).await?;
    Ok(message(target.removed_message()))
}

fn pokemon_target(id_str: &str) -> Result<Target, AppError> {
    parse_id(id_str, POKEMON_NOT_FOUND).map(Target::Pokemon)
}

fn region_target(id_str: &str) -> Result<Target, AppError> {
    parse_id(id_str, REGION_NOT_FOUND).map(Target::Region)
}

pub async fn add_pokemon_favorite(
    State(state): State<AppState>,
    requested: RequestedUser,
    Path(id_str): Path<String>,
) -> Result<AddOutcome, AppError> {
    add(&state, requested, pokemon_target(&id_str)?).await
}

pub async fn add_region_favorite(
    State(state): State<AppState>,
    requested: RequestedUser,
    Path(id_str): Path<String>,
) -> Result<AddOutcome, AppError> {
    add(&state, requested, region_target(&id_str)?).await
}

pub async fn delete_pokemon_favorite(
    State(state): State<AppState>,
    requested: RequestedUser,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<Message>), AppError> {
    remove(&state, requested, pokemon_target(&id_str)?).await
}

pub async fn delete_region_favorite(
    State(state): State<AppState>,
    requested: RequestedUser,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<Message>), AppError> {
    remove(&state, requested, region_target(&id_str)?).await
}
