use axum::{Router, routing::get};

use crate::modules::greetings::use_cases::check_palindrome::inbound::http as palindrome_http;
use crate::modules::greetings::use_cases::greet::inbound::http as greet_http;
use crate::modules::league::routes as league;
use crate::modules::records::routes as records;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/hello", get(greet_http::hello))
        .route("/greeting", get(greet_http::hello))
        .route("/greeting/{name}", get(greet_http::personal))
        .route("/palindromes/{word}", get(palindrome_http::handle))
        .merge(records::routes(state.customers))
        .merge(records::routes(state.students))
        .merge(league::routes(state.league))
}
