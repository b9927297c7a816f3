use axum::Json;
use std::collections::BTreeMap;

use crate::modules::league::core::relation::{Relation, SCHEMA};

pub async fn handle() -> Json<BTreeMap<&'static str, &'static [Relation]>> {
    Json(SCHEMA.into_iter().collect())
}
