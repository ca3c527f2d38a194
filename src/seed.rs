//! Load users, regions and Pokémon from a JSON file into the in-memory store.

use crate::error::{AppError, ConfigError};
use crate::models::{Pokemon, Region, User};
use crate::store::MemoryRepository;
use serde::Deserialize;
use std::path::Path;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub regions: Vec<Region>,
    #[serde(default)]
    pub pokemons: Vec<Pokemon>,
}

pub async fn load_seed(path: &Path) -> Result<SeedData, AppError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ConfigError::Seed(format!("{}: {}", path.display(), e)))?;
    parse_seed(&raw)
}

pub fn parse_seed(raw: &str) -> Result<SeedData, AppError> {
    let seed = serde_json::from_str(raw).map_err(|e| ConfigError::Seed(e.to_string()))?;
    Ok(seed)
}

impl MemoryRepository {
    pub fn from_seed(seed: SeedData) -> Self {
        let repo = MemoryRepository::new();
        tracing::info!(
            users = seed.users.len(),
            regions = seed.regions.len(),
            pokemons = seed.pokemons.len(),
            "seeding memory store"
        );
        for u in seed.users {
            repo.insert_user(u);
        }
        for r in seed.regions {
            repo.insert_region(r);
        }
        for p in seed.pokemons {
            repo.insert_pokemon(p);
        }
        repo
    }
}
