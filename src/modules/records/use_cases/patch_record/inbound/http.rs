use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::records::state::RecordsState;
use crate::shared::core::record::{Record, RecordPatch};
use crate::shared::inbound::response::respond;

pub async fn handle<R: Record>(
    State(state): State<RecordsState<R>>,
    body: Result<Json<R::Patch>, JsonRejection>,
) -> Response {
    let Json(patch) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let id = patch.id();
    let result = state.store.partial_update(patch).await;
    respond(state.style, R::NOUN, result, StatusCode::OK, |_| {
        format!("{} patched with id: {id}", R::NOUN)
    })
}
