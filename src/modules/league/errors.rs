use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::league::core::ports::LeagueError;
use crate::shared::inbound::response::Envelope;

impl IntoResponse for LeagueError {
    fn into_response(self) -> Response {
        let status = match self {
            LeagueError::NotFound { .. } => StatusCode::NOT_FOUND,
            LeagueError::MissingReference { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            LeagueError::Constraint(_) => StatusCode::CONFLICT,
        };
        (
            status,
            Json(Envelope::<()>::new(status, self.to_string(), None)),
        )
            .into_response()
    }
}
