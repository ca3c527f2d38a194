//! Pokedex API: Pokémon and region catalog with per-user favorites.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod identity;
pub mod models;
pub mod response;
pub mod routes;
pub mod seed;
pub mod service;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use models::{Favorite, FavoriteView, Pokemon, Region, Target, User};
pub use routes::{api_routes, app, common_routes, App};
pub use seed::{load_seed, SeedData};
pub use service::{AddOutcome, FavoritesService};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_schema, MemoryRepository, PgRepository, Repository};
