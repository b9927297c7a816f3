use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};

use crate::modules::records::state::RecordsState;
use crate::shared::core::record::Record;
use crate::shared::inbound::response::respond;

pub async fn handle<R: Record>(
    State(state): State<RecordsState<R>>,
    Path(id): Path<i64>,
) -> Response {
    let result = state.store.delete(id).await;
    respond(state.style, R::NOUN, result, StatusCode::NO_CONTENT, |_| {
        format!("{} deleted with id: {id}", R::NOUN)
    })
}
