//! In-process store used when no database is configured, and by tests.

use super::Repository;
use crate::error::AppError;
use crate::models::{Favorite, Pokemon, Region, Target, User};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct Tables {
    users: BTreeMap<i64, User>,
    regions: BTreeMap<i64, Region>,
    pokemons: BTreeMap<i64, Pokemon>,
    favorites: BTreeMap<i64, Favorite>,
    last_favorite_id: i64,
}

/// Ordered maps keep every listing ascending by id. Removing a Pokémon or region does not cascade.
#[derive(Default)]
pub struct MemoryRepository {
    tables: RwLock<Tables>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn insert_user(&self, user: User) {
        self.write().users.insert(user.id, user);
    }

    pub fn insert_region(&self, region: Region) {
        self.write().regions.insert(region.id, region);
    }

    pub fn insert_pokemon(&self, pokemon: Pokemon) {
        self.write().pokemons.insert(pokemon.id, pokemon);
    }

    pub fn remove_pokemon(&self, id: i64) -> Option<Pokemon> {
        self.write().pokemons.remove(&id)
    }

    pub fn remove_region(&self, id: i64) -> Option<Region> {
        self.write().regions.remove(&id)
    }

    pub fn favorite_count(&self) -> usize {
        self.read().favorites.len()
    }
}

#[async_trait]
impl Repository for MemoryRepository {
    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        Ok(self.read().users.values().cloned().collect())
    }

    async fn get_user(&self, id: i64) -> Result<Option<User>, AppError> {
        Ok(self.read().users.get(&id).cloned())
    }

    async fn first_user_id(&self) -> Result<Option<i64>, AppError> {
        Ok(self.read().users.keys().next().copied())
    }

    async fn list_pokemons(&self) -> Result<Vec<Pokemon>, AppError> {
        Ok(self.read().pokemons.values().cloned().collect())
    }

    async fn get_pokemon(&self, id: i64) -> Result<Option<Pokemon>, AppError> {
        Ok(self.read().pokemons.get(&id).cloned())
    }

    async fn list_regions(&self) -> Result<Vec<Region>, AppError> {
        Ok(self.read().regions.values().cloned().collect())
    }

    async fn get_region(&self, id: i64) -> Result<Option<Region>, AppError> {
        Ok(self.read().regions.get(&id).cloned())
    }

    async fn list_favorites(&self, user_id: i64) -> Result<Vec<Favorite>, AppError> {
        Ok(self
            .read()
            .favorites
            .values()
            .filter(|f| f.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_favorite(&self, user_id: i64, target: Target) -> Result<Option<Favorite>, AppError> {
        Ok(self
            .read()
            .favorites
            .values()
            .find(|f| f.user_id == user_id && f.target == target)
            .cloned())
    }

    async fn insert_favorite(&self, user_id: i64, target: Target) -> Result<Option<Favorite>, AppError> {
        let mut tables = self.write();
        if tables
            .favorites
            .values()
            .any(|f| f.user_id == user_id && f.target == target)
        {
            return Ok(None);
        }
        tables.last_favorite_id += 1;
        let favorite = Favorite {
            id: tables.last_favorite_id,
            user_id,
            target,
            created_at: chrono::Utc::now().naive_utc(),
        };
        tables.favorites.insert(favorite.id, favorite.clone());
        Ok(Some(favorite))
    }

    async fn delete_favorite(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.write().favorites.remove(&id).is_some())
    }
}
