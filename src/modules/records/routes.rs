use axum::{Router, routing::get};

use crate::modules::records::state::RecordsState;
use crate::modules::records::use_cases::create_record::inbound::http as create_http;
use crate::modules::records::use_cases::delete_record::inbound::http as delete_http;
use crate::modules::records::use_cases::find_record::inbound::http as find_http;
use crate::modules::records::use_cases::list_records::inbound::http as list_http;
use crate::modules::records::use_cases::patch_record::inbound::http as patch_http;
use crate::modules::records::use_cases::replace_record::inbound::http as replace_http;
use crate::shared::core::record::Record;

/// Mounts the six record operations under `/<R::RESOURCE>`.
pub fn routes<R: Record>(state: RecordsState<R>) -> Router {
    let collection = format!("/{}", R::RESOURCE);
    let member = format!("/{}/{{key}}", R::RESOURCE);
    Router::new()
        .route(
            &collection,
            get(list_http::handle::<R>)
                .post(create_http::handle::<R>)
                .put(replace_http::handle::<R>)
                .patch(patch_http::handle::<R>),
        )
        .route(
            &member,
            get(find_http::handle::<R>).delete(delete_http::handle::<R>),
        )
        .with_state(state)
}
