// Response shaping shared by every record endpoint.
//
// Purpose
// - Render one store outcome either as the bare record or as a status + message envelope.
//
// Rules
// - Bare: successes are 200 with the record, a missing key is 200 with `null`, a duplicate is 409 with `null`.
// - Envelope: the status carries the outcome, the message names the record, 204 has no body.

use crate::shared::infrastructure::record_store::StoreError;
use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStyle {
    #[default]
    Bare,
    Envelope,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown response style: {0} (expected `bare` or `envelope`)")]
pub struct UnknownResponseStyle(pub String);

impl FromStr for ResponseStyle {
    type Err = UnknownResponseStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bare" => Ok(ResponseStyle::Bare),
            "envelope" => Ok(ResponseStyle::Envelope),
            other => Err(UnknownResponseStyle(other.to_string())),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Envelope<T> {
    pub status: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn new(status: StatusCode, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
            data,
        }
    }
}

/// Renders `result` in `style`. `success` is the status used by the envelope on `Ok`.
pub fn respond<T, F>(
    style: ResponseStyle,
    noun: &str,
    result: Result<T, StoreError>,
    success: StatusCode,
    message: F,
) -> Response
where
    T: Serialize,
    F: FnOnce(&T) -> String,
{
    match (style, result) {
        (ResponseStyle::Bare, Ok(data)) => Json(data).into_response(),
        (ResponseStyle::Bare, Err(StoreError::NotFound { .. })) => {
            Json(Option::<T>::None).into_response()
        }
        (ResponseStyle::Bare, Err(StoreError::Duplicate { .. })) => {
            (StatusCode::CONFLICT, Json(Option::<T>::None)).into_response()
        }
        (ResponseStyle::Envelope, Ok(_)) if success == StatusCode::NO_CONTENT => {
            StatusCode::NO_CONTENT.into_response()
        }
        (ResponseStyle::Envelope, Ok(data)) => {
            let message = message(&data);
            (success, Json(Envelope::new(success, message, Some(data)))).into_response()
        }
        (ResponseStyle::Envelope, Err(StoreError::NotFound { key })) => {
            envelope_error(StatusCode::NOT_FOUND, format!("{noun} not found with key: {key}"))
        }
        (ResponseStyle::Envelope, Err(StoreError::Duplicate { id })) => {
            envelope_error(StatusCode::CONFLICT, format!("{noun} already exists with id: {id}"))
        }
    }
}

fn envelope_error(status: StatusCode, message: String) -> Response {
    (status, Json(Envelope::<()>::new(status, message, None))).into_response()
}
