mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use common::{get, router, seeded_repo};
use tower::ServiceExt;
use serde_json::json;

#[tokio::test]
async fn lists_pokemons_in_id_order() {
    let app = router(seeded_repo());
    let (status, body) = get(&app, "/pokemons").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3, 25]);
}

#[tokio::test]
async fn gets_every_known_pokemon_and_404s_unknown() {
    let app = router(seeded_repo());
    for id in [1, 3, 25] {
        let (status, body) = get(&app, &format!("/pokemons/{}", id)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], json!(id));
    }
    let (status, body) = get(&app, "/pokemons/2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Pokémon no encontrado.", "status": 404}));
}

#[tokio::test]
async fn pokemon_serialization_carries_all_columns() {
    let app = router(seeded_repo());
    let (_, body) = get(&app, "/pokemons/25").await;
    assert_eq!(
        body,
        json!({
            "id": 25,
            "name": "pikachu",
            "home_region_id": 1,
            "sprite_url": "https://img.example.com/25.png",
            "base_experience": 64,
            "height_m": 0.7,
            "weight_kg": 6.9,
            "created_at": "2024-01-15T09:00:00"
        })
    );
}

#[tokio::test]
async fn non_numeric_id_is_not_found() {
    let app = router(seeded_repo());
    let (status, _) = get(&app, "/pokemons/pikachu").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, body) = get(&app, "/regions/-1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Región no encontrada.");
}

#[tokio::test]
async fn regions_list_and_get() {
    let app = router(seeded_repo());
    let (status, body) = get(&app, "/regions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[0]["name"], "Kanto");

    let (status, body) = get(&app, "/regions/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Johto");
    assert_eq!(body["description"], "Johto region");

    let (status, _) = get(&app, "/regions/9").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn users_are_listed_without_password() {
    let app = router(seeded_repo());
    let (status, body) = get(&app, "/users").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body[0],
        json!({
            "id": 1,
            "email": "ash@example.com",
            "username": "ash",
            "is_active": true,
            "created_at": "2024-01-15T09:00:00"
        })
    );
}

#[tokio::test]
async fn health_ready_and_version() {
    let app = router(seeded_repo());
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));

    let (status, body) = get(&app, "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["store"], "ok");

    let (_, body) = get(&app, "/version").await;
    assert_eq!(body["name"], "pokedex-api");
}

#[tokio::test]
async fn trailing_slash_reaches_same_route() {
    let app = router(seeded_repo());
    let (status, body) = get(&app, "/pokemons/1/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "bulbasaur");

    let (status, body) = get(&app, "/regions/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn cross_origin_requests_are_allowed() {
    let app = router(seeded_repo());
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/pokemons")
                .header(header::ORIGIN, "https://pokedex.example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
