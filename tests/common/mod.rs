//! Shared fixtures: a seeded in-memory store and a one-shot request helper.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use chrono::NaiveDateTime;
use pokedex_api::{app, App, AppState, MemoryRepository, Pokemon, Region, Repository, User};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub fn ts() -> NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(2024, 1, 15)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .unwrap()
}

pub fn user(id: i64, name: &str) -> User {
    User {
        id,
        email: format!("{}@example.com", name),
        username: name.to_string(),
        is_active: true,
        created_at: ts(),
    }
}

pub fn region(id: i64, name: &str) -> Region {
    Region {
        id,
        name: name.to_string(),
        description: Some(format!("{} region", name)),
        created_at: ts(),
    }
}

pub fn pokemon(id: i64, name: &str, region_id: i64) -> Pokemon {
    Pokemon {
        id,
        name: name.to_string(),
        home_region_id: Some(region_id),
        sprite_url: Some(format!("https://img.example.com/{}.png", id)),
        base_experience: Some(64),
        height_m: Some(0.7),
        weight_kg: Some(6.9),
        created_at: ts(),
    }
}

/// Users 1 and 2, regions 1 and 2, Pokémon 1, 3 and 25.
pub fn seeded_repo() -> Arc<MemoryRepository> {
    let repo = MemoryRepository::new();
    repo.insert_user(user(1, "ash"));
    repo.insert_user(user(2, "misty"));
    repo.insert_region(region(1, "Kanto"));
    repo.insert_region(region(2, "Johto"));
    repo.insert_pokemon(pokemon(1, "bulbasaur", 1));
    repo.insert_pokemon(pokemon(3, "venusaur", 1));
    repo.insert_pokemon(pokemon(25, "pikachu", 1));
    Arc::new(repo)
}

pub fn router(repo: Arc<MemoryRepository>) -> App {
    let repo: Arc<dyn Repository> = repo;
    app(AppState { repo })
}

pub async fn send(
    app: &App,
    method: Method,
    uri: &str,
    headers: &[(&str, &str)],
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    for (k, v) in headers {
        builder = builder.header(*k, *v);
    }
    let response = app
        .clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub async fn get(app: &App, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, &[]).await
}

pub async fn post(app: &App, uri: &str) -> (StatusCode, Value) {
    send(app, Method::POST, uri, &[]).await
}

pub async fn delete(app: &App, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, &[]).await
}
