use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::records::state::RecordsState;
use crate::shared::core::record::Record;
use crate::shared::inbound::response::respond;

pub async fn handle<R: Record>(
    State(state): State<RecordsState<R>>,
    body: Result<Json<R>, JsonRejection>,
) -> Response {
    let Json(record) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let result = state.store.insert(record).await;
    respond(state.style, R::NOUN, result, StatusCode::CREATED, |r| {
        format!("{} created with id: {}", R::NOUN, r.id())
    })
}
