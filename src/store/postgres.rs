//! PostgreSQL backend: database bootstrap, table DDL and the [`Repository`] implementation.

use super::Repository;
use crate::error::{AppError, ConfigError};
use crate::models::{Favorite, FavoriteRow, Pokemon, Region, Target, User};
use async_trait::async_trait;
use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

const USER_COLUMNS: &str = "id, email, username, is_active, created_at";
const REGION_COLUMNS: &str = "id, name, description, created_at";
const POKEMON_COLUMNS: &str =
    "id, name, home_region_id, sprite_url, base_experience, height_m, weight_kg, created_at";
const FAVORITE_COLUMNS: &str = "id, user_id, pokemon_id, region_id, created_at";

/// Table DDL in dependency order. Every statement is idempotent.
const SCHEMA_DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id BIGSERIAL PRIMARY KEY,
        email VARCHAR(120) NOT NULL UNIQUE,
        password VARCHAR(255) NOT NULL,
        username VARCHAR(50) NOT NULL UNIQUE,
        is_active BOOLEAN NOT NULL DEFAULT TRUE,
        created_at TIMESTAMP NOT NULL DEFAULT (NOW() AT TIME ZONE 'utc')
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS regions (
        id BIGSERIAL PRIMARY KEY,
        name VARCHAR(80) NOT NULL UNIQUE,
        description TEXT,
        created_at TIMESTAMP NOT NULL DEFAULT (NOW() AT TIME ZONE 'utc')
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS pokemons (
        id BIGSERIAL PRIMARY KEY,
        name VARCHAR(80) NOT NULL UNIQUE,
        home_region_id BIGINT REFERENCES regions(id) ON DELETE SET NULL,
        sprite_url VARCHAR(255),
        base_experience INTEGER,
        height_m DOUBLE PRECISION,
        weight_kg DOUBLE PRECISION,
        created_at TIMESTAMP NOT NULL DEFAULT (NOW() AT TIME ZONE 'utc')
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_pokemons_home_region_id ON pokemons (home_region_id)",
    r#"
    CREATE TABLE IF NOT EXISTS favorites (
        id BIGSERIAL PRIMARY KEY,
        user_id BIGINT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        pokemon_id BIGINT REFERENCES pokemons(id) ON DELETE CASCADE,
        region_id BIGINT REFERENCES regions(id) ON DELETE CASCADE,
        created_at TIMESTAMP NOT NULL DEFAULT (NOW() AT TIME ZONE 'utc'),
        CONSTRAINT favorites_single_target CHECK ((pokemon_id IS NULL) <> (region_id IS NULL))
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_favorites_user_id ON favorites (user_id)",
    "CREATE UNIQUE INDEX IF NOT EXISTS ux_favorites_user_pokemon ON favorites (user_id, pokemon_id) WHERE pokemon_id IS NOT NULL",
    "CREATE UNIQUE INDEX IF NOT EXISTS ux_favorites_user_region ON favorites (user_id, region_id) WHERE region_id IS NOT NULL",
];

/// Create users, regions, pokemons and favorites tables with their constraints if missing.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), AppError> {
    for ddl in SCHEMA_DDL {
        sqlx::query(*ddl).execute(pool).await?;
    }
    tracing::info!("database schema ready");
    Ok(())
}

/// Options for the `postgres` admin database plus the database named by `database_url`, if any.
fn admin_connection(database_url: &str) -> Result<(PgConnectOptions, Option<String>), ConfigError> {
    let opts = PgConnectOptions::from_str(database_url)
        .map_err(|e| ConfigError::DatabaseUrl(e.to_string()))?;
    let target = opts.get_database().map(str::to_string);
    Ok((opts.database("postgres"), target))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Connect to the `postgres` admin database and create the target database if it does not exist.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin, db_name) = admin_connection(database_url)?;
    let Some(db_name) = db_name.filter(|name| name != "postgres") else {
        return Ok(());
    };
    let mut conn: sqlx::PgConnection = admin.connect().await?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// The target column and id used to filter favorites by target.
fn target_filter(target: Target) -> (&'static str, i64) {
    match target {
        Target::Pokemon(id) => ("pokemon_id", id),
        Target::Region(id) => ("region_id", id),
    }
}

#[derive(Clone)]
pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        PgRepository { pool }
    }
}

#[async_trait]
impl Repository for PgRepository {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let sql = format!("SELECT {} FROM users ORDER BY id ASC", USER_COLUMNS);
        Ok(sqlx::query_as::<_, User>(&sql).fetch_all(&self.pool).await?)
    }

    async fn get_user(&self, id: i64) -> Result<Option<User>, AppError> {
        let sql = format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS);
        Ok(sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn first_user_id(&self) -> Result<Option<i64>, AppError> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT id FROM users ORDER BY id ASC LIMIT 1")
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|(id,)| id))
    }

    async fn list_pokemons(&self) -> Result<Vec<Pokemon>, AppError> {
        let sql = format!("SELECT {} FROM pokemons ORDER BY id ASC", POKEMON_COLUMNS);
        Ok(sqlx::query_as::<_, Pokemon>(&sql).fetch_all(&self.pool).await?)
    }

    async fn get_pokemon(&self, id: i64) -> Result<Option<Pokemon>, AppError> {
        let sql = format!("SELECT {} FROM pokemons WHERE id = $1", POKEMON_COLUMNS);
        Ok(sqlx::query_as::<_, Pokemon>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn list_regions(&self) -> Result<Vec<Region>, AppError> {
        let sql = format!("SELECT {} FROM regions ORDER BY id ASC", REGION_COLUMNS);
        Ok(sqlx::query_as::<_, Region>(&sql).fetch_all(&self.pool).await?)
    }

    async fn get_region(&self, id: i64) -> Result<Option<Region>, AppError> {
        let sql = format!("SELECT {} FROM regions WHERE id = $1", REGION_COLUMNS);
        Ok(sqlx::query_as::<_, Region>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn list_favorites(&self, user_id: i64) -> Result<Vec<Favorite>, AppError> {
        let sql = format!(
            "SELECT {} FROM favorites WHERE user_id = $1 ORDER BY id ASC",
            FAVORITE_COLUMNS
        );
        let rows = sqlx::query_as::<_, FavoriteRow>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(Favorite::try_from).collect()
    }

    async fn find_favorite(&self, user_id: i64, target: Target) -> Result<Option<Favorite>, AppError> {
        let (column, target_id) = target_filter(target);
        let sql = format!(
            "SELECT {} FROM favorites WHERE user_id = $1 AND {} = $2 ORDER BY id ASC LIMIT 1",
            FAVORITE_COLUMNS, column
        );
        let row = sqlx::query_as::<_, FavoriteRow>(&sql)
            .bind(user_id)
            .bind(target_id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(Favorite::try_from).transpose()
    }

    async fn insert_favorite(&self, user_id: i64, target: Target) -> Result<Option<Favorite>, AppError> {
        let sql = format!(
            "INSERT INTO favorites (user_id, pokemon_id, region_id) VALUES ($1, $2, $3) \
             ON CONFLICT DO NOTHING RETURNING {}",
            FAVORITE_COLUMNS
        );
        let row = sqlx::query_as::<_, FavoriteRow>(&sql)
            .bind(user_id)
            .bind(target.pokemon_id())
            .bind(target.region_id())
            .fetch_optional(&self.pool)
            .await?;
        row.map(Favorite::try_from).transpose()
    }

    async fn delete_favorite(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM favorites WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_connection_targets_postgres_database() {
        let (admin, name) = admin_connection(
            "postgres://u:p@localhost:5432/pokedex?sslmode=verify-full&sslrootcert=/etc/ssl/root.crt",
        )
        .unwrap();
        assert_eq!(name.as_deref(), Some("pokedex"));
        assert_eq!(admin.get_database(), Some("postgres"));
        assert_eq!(admin.get_host(), "localhost");
        assert_eq!(admin.get_port(), 5432);
    }

    #[test]
    fn url_without_database_path_names_no_database() {
        let (admin, name) = admin_connection("postgres://u:p@localhost:5432").unwrap();
        // Without a path only PGDATABASE can name the target.
        assert_eq!(name, std::env::var("PGDATABASE").ok());
        assert_eq!(admin.get_database(), Some("postgres"));
        assert_eq!(admin.get_username(), "u");
    }

    #[test]
    fn malformed_url_is_a_config_error() {
        let err = admin_connection("not a url").unwrap_err();
        assert!(matches!(err, ConfigError::DatabaseUrl(_)));
    }

    #[test]
    fn identifiers_are_quoted() {
        assert_eq!(quote_ident("poke\"dex"), "\"poke\"\"dex\"");
    }

    #[test]
    fn favorites_table_enforces_single_target_and_uniqueness() {
        let ddl = SCHEMA_DDL.join("\n");
        assert!(ddl.contains("favorites_single_target"));
        assert!(ddl.contains("ux_favorites_user_pokemon"));
        assert!(ddl.contains("ux_favorites_user_region"));
    }
}
