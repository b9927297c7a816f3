use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::modules::league::state::LeagueState;
use crate::modules::league::use_cases::load_club_roster::handler::load_club_roster;

pub async fn handle(State(state): State<LeagueState>, Path(club_id): Path<i64>) -> Response {
    match load_club_roster(&*state.repository, club_id).await {
        Ok(roster) => Json(roster).into_response(),
        Err(e) => e.into_response(),
    }
}
