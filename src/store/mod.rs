//! Repository interface over users, reference data and favorites, with PostgreSQL and in-memory backends.

mod memory;
mod postgres;

pub use memory::MemoryRepository;
pub use postgres::{ensure_database_exists, ensure_schema, PgRepository};

use crate::error::AppError;
use crate::models::{Favorite, Pokemon, Region, Target, User};
use async_trait::async_trait;

/// Storage capabilities the handlers rely on. Each call is its own unit of work.
#[async_trait]
pub trait Repository: Send + Sync {
    /// Cheap round trip used by the readiness probe.
    async fn ping(&self) -> Result<(), AppError>;

    async fn list_users(&self) -> Result<Vec<User>, AppError>;
    async fn get_user(&self, id: i64) -> Result<Option<User>, AppError>;
    /// Lowest user id, if any user exists.
    async fn first_user_id(&self) -> Result<Option<i64>, AppError>;

    async fn list_pokemons(&self) -> Result<Vec<Pokemon>, AppError>;
    async fn get_pokemon(&self, id: i64) -> Result<Option<Pokemon>, AppError>;

    async fn list_regions(&self) -> Result<Vec<Region>, AppError>;
    async fn get_region(&self, id: i64) -> Result<Option<Region>, AppError>;

    /// All favorites of a user, ascending by id.
    async fn list_favorites(&self, user_id: i64) -> Result<Vec<Favorite>, AppError>;
    async fn find_favorite(&self, user_id: i64, target: Target) -> Result<Option<Favorite>, AppError>;
    /// Inserts a favorite. Returns None when the store already holds one for (user, target).
    async fn insert_favorite(&self, user_id: i64, target: Target) -> Result<Option<Favorite>, AppError>;
    /// Deletes by id. Returns whether a row was removed.
    async fn delete_favorite(&self, id: i64) -> Result<bool, AppError>;
}
