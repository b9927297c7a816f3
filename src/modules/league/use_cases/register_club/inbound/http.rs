use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::league::core::club::ClubAggregate;
use crate::modules::league::state::LeagueState;

pub async fn handle(
    State(state): State<LeagueState>,
    body: Result<Json<ClubAggregate>, JsonRejection>,
) -> Response {
    let Json(aggregate) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.repository.save_club(aggregate).await {
        Ok(club) => (StatusCode::CREATED, Json(club)).into_response(),
        Err(e) => e.into_response(),
    }
}
