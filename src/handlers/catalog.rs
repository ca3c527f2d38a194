//! Read-only Pokémon and region handlers.

use super::parse_id;
use crate::error::AppError;
use crate::models::{Pokemon, Region, POKEMON_NOT_FOUND, REGION_NOT_FOUND};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

pub async fn list_pokemons(State(state): State<AppState>) -> Result<Json<Vec<Pokemon>>, AppError> {
    Ok(Json(state.repo.list_pokemons().await?))
}

pub async fn get_pokemon(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Pokemon>, AppError> {
    let id = parse_id(&id_str, POKEMON_NOT_FOUND)?;
    let pokemon = state
        .repo
        .get_pokemon(id)
        .await?
        .ok_or_else(|| AppError::NotFound(POKEMON_NOT_FOUND.to_string()))?;
    Ok(Json(pokemon))
}

pub async fn list_regions(State(state): State<AppState>) -> Result<Json<Vec<Region>>, AppError> {
    Ok(Json(state.repo.list_regions().await?))
}

pub async fn get_region(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Region>, AppError> {
    let id = parse_id(&id_str, REGION_NOT_FOUND)?;
    let region = state
        .repo
        .get_region(id)
        .await?
        .ok_or_else(|| AppError::NotFound(REGION_NOT_FOUND.to_string()))?;
    Ok(Json(region))
}
