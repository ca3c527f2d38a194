//! Response bodies for favorite mutations.

use crate::models::Favorite;
use crate::service::AddOutcome;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub const ALREADY_FAVORITE_MSG: &str = "Ya estaba en favoritos";

#[derive(Serialize)]
pub struct Message {
    pub msg: String,
}

#[derive(Serialize)]
pub struct AlreadyFavorite {
    pub msg: &'static str,
    pub favorite: Favorite,
}

pub fn message(msg: impl Into<String>) -> (StatusCode, Json<Message>) {
    (StatusCode::OK, Json(Message { msg: msg.into() }))
}

/// 201 with the new favorite, or 200 with the existing one wrapped in a message.
impl IntoResponse for AddOutcome {
    fn into_response(self) -> Response {
        match self {
            AddOutcome::Created(favorite) => (StatusCode::CREATED, Json(favorite)).into_response(),
            AddOutcome::AlreadyExists(favorite) => (
                StatusCode::OK,
                Json(AlreadyFavorite {
                    msg: ALREADY_FAVORITE_MSG,
                    favorite,
                }),
            )
                .into_response(),
        }
    }
}
