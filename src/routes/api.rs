//! Reference data, user and favorite routes.

use crate::handlers::{
    add_pokemon_favorite, add_region_favorite, delete_pokemon_favorite, delete_region_favorite,
    get_pokemon, get_region, list_favorites, list_pokemons, list_regions, list_users,
};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/pokemons", get(list_pokemons))
        .route("/pokemons/:id", get(get_pokemon))
        .route("/regions", get(list_regions))
        .route("/regions/:id", get(get_region))
        .route("/users", get(list_users))
        .route("/users/favorites", get(list_favorites))
        .route(
            "/favorite/pokemon/:id",
            post(add_pokemon_favorite).delete(delete_pokemon_favorite),
        )
        .route(
            "/favorite/region/:id",
            post(add_region_favorite).delete(delete_region_favorite),
        )
        .with_state(state)
}
