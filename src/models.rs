//! Row types for users, regions, Pokémon and favorites, plus their JSON shapes.

use crate::error::AppError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

fn now() -> NaiveDateTime {
    chrono::Utc::now().naive_utc()
}

fn default_true() -> bool {
    true
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default = "now")]
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Region {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "now")]
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Pokemon {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub home_region_id: Option<i64>,
    #[serde(default)]
    pub sprite_url: Option<String>,
    #[serde(default)]
    pub base_experience: Option<i32>,
    #[serde(default)]
    pub height_m: Option<f64>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default = "now")]
    pub created_at: NaiveDateTime,
}

pub const POKEMON_NOT_FOUND: &str = "Pokémon no encontrado.";
pub const REGION_NOT_FOUND: &str = "Región no encontrada.";

/// What a favorite points at. Exactly one target per favorite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    Pokemon(i64),
    Region(i64),
}

impl Target {
    pub fn pokemon_id(&self) -> Option<i64> {
        match self {
            Target::Pokemon(id) => Some(*id),
            Target::Region(_) => None,
        }
    }

    pub fn region_id(&self) -> Option<i64> {
        match self {
            Target::Region(id) => Some(*id),
            Target::Pokemon(_) => None,
        }
    }

    pub fn not_found_message(&self) -> &'static str {
        match self {
            Target::Pokemon(_) => POKEMON_NOT_FOUND,
            Target::Region(_) => REGION_NOT_FOUND,
        }
    }

    pub fn not_favorited_message(&self) -> &'static str {
        match self {
            Target::Pokemon(_) => "Ese Pokémon no está en tus favoritos.",
            Target::Region(_) => "Esa Región no está en tus favoritos.",
        }
    }

    pub fn removed_message(&self) -> &'static str {
        match self {
            Target::Pokemon(_) => "Favorito (Pokémon) eliminado",
            Target::Region(_) => "Favorito (Región) eliminado",
        }
    }
}

/// Favorite as stored: user plus one target. Serialized through [`FavoriteRow`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(into = "FavoriteRow")]
pub struct Favorite {
    pub id: i64,
    pub user_id: i64,
    pub target: Target,
    pub created_at: NaiveDateTime,
}

/// Column layout of the favorites table: two nullable target ids.
#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct FavoriteRow {
    pub id: i64,
    pub user_id: i64,
    pub pokemon_id: Option<i64>,
    pub region_id: Option<i64>,
    pub created_at: NaiveDateTime,
}

impl From<Favorite> for FavoriteRow {
    fn from(f: Favorite) -> Self {
        FavoriteRow {
            id: f.id,
            user_id: f.user_id,
            pokemon_id: f.target.pokemon_id(),
            region_id: f.target.region_id(),
            created_at: f.created_at,
        }
    }
}

impl TryFrom<FavoriteRow> for Favorite {
    type Error = AppError;

    fn try_from(row: FavoriteRow) -> Result<Self, Self::Error> {
        let target = match (row.pokemon_id, row.region_id) {
            (Some(p), None) => Target::Pokemon(p),
            (None, Some(r)) => Target::Region(r),
            (Some(_), Some(_)) => {
                return Err(AppError::Integrity(format!(
                    "favorite {} references both a pokemon and a region",
                    row.id
                )))
            }
            (None, None) => {
                return Err(AppError::Integrity(format!(
                    "favorite {} has no target",
                    row.id
                )))
            }
        };
        Ok(Favorite {
            id: row.id,
            user_id: row.user_id,
            target,
            created_at: row.created_at,
        })
    }
}

/// Favorite listing entry with the referenced row inlined.
/// Only the key matching the target is emitted; it is `null` when the row no longer exists.
#[derive(Clone, Debug, Serialize)]
pub struct FavoriteView {
    #[serde(flatten)]
    pub favorite: FavoriteRow,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pokemon: Option<Option<Pokemon>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<Option<Region>>,
}
