//! Pokedex API server.
//!
//! Run from repo root: `cargo run -p pokedex-server`
//! Without `DATABASE_URL` the in-memory store is used, optionally seeded from `SEED_PATH`.

use pokedex_api::{
    app, ensure_database_exists, ensure_schema, load_seed, AppState, MemoryRepository, PgRepository,
    Settings,
};
use axum::{extract::Request, ServiceExt};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Loads .env, which may carry RUST_LOG.
    let settings = Settings::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("pokedex_api=info,pokedex_server=info,tower_http=info")
            }),
        )
        .init();

    let state = match &settings.database_url {
        Some(database_url) => {
            if settings.create_database {
                ensure_database_exists(database_url).await?;
            }
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(settings.max_connections)
                .connect(database_url)
                .await?;
            ensure_schema(&pool).await?;
            tracing::info!("using PostgreSQL store");
            AppState::new(PgRepository::new(pool))
        }
        None => {
            let repo = match &settings.seed_path {
                Some(path) => MemoryRepository::from_seed(load_seed(path).await?),
                None => MemoryRepository::new(),
            };
            tracing::warn!("DATABASE_URL not set, using in-memory store");
            AppState::new(repo)
        }
    };

    let listener = TcpListener::bind(settings.bind_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app(state))).await?;
    Ok(())
}
