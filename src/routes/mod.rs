//! Router assembly.

mod api;
mod common;

pub use api::api_routes;
pub use common::common_routes;

use crate::state::AppState;
use axum::Router;
use tower::{Layer, ServiceBuilder};
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::TraceLayer,
};

/// No route takes a body; anything larger than this is rejected outright.
const BODY_LIMIT_BYTES: usize = 16 * 1024;

/// The served application. Trailing slashes are trimmed before routing.
pub type App = NormalizePath<Router>;

/// Full application: common routes, API routes, request tracing, body limit and CORS.
/// `/pokemons/1/` and `/pokemons/1` reach the same handler.
pub fn app(state: AppState) -> App {
    let router = Router::new()
        .merge(common_routes(state.clone()))
        .merge(api_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                // Must sit outside CORS: Cors needs a `Default` inner response body.
                .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
                .layer(CorsLayer::permissive()),
        );
    NormalizePathLayer::trim_trailing_slash().layer(router)
}
