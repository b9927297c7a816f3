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
    Path(key): Path<String>,
) -> Response {
    let result = state.store.find_by_key(&key).await;
    respond(state.style, R::NOUN, result, StatusCode::OK, |_| {
        format!("{} found with key: {key}", R::NOUN)
    })
}
