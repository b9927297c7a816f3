use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::league::state::LeagueState;
use crate::modules::league::use_cases::describe_schema::inbound::http as schema_http;
use crate::modules::league::use_cases::load_club_roster::inbound::http as roster_http;
use crate::modules::league::use_cases::register_club::inbound::http as register_http;

pub fn routes(state: LeagueState) -> Router {
    Router::new()
        .route("/league/schema", get(schema_http::handle))
        .route("/league/clubs", post(register_http::handle))
        .route("/league/clubs/{id}", get(roster_http::handle))
        .with_state(state)
}
