use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use rstest::rstest;
use tower::ServiceExt;

use crate::shared::inbound::response::ResponseStyle;
use crate::shell::http::router;
use crate::shell::state::AppState;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[rstest]
#[tokio::test]
async fn student_lifecycle_in_bare_style() {
    let app = router(AppState::seeded(ResponseStyle::Bare).await.unwrap());

    let (status, list) = send(&app, empty_request("GET", "/students")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 5);

    let (_, created) = send(
        &app,
        json_request(
            "POST",
            "/students",
            r#"{"id":6,"name":"Lucia","age":22,"email":"lucia@gmail.com","course":"Compilers"}"#,
        ),
    )
    .await;
    assert_eq!(created["name"], "Lucia");

    let (_, found) = send(&app, empty_request("GET", "/students/LUCIA")).await;
    assert_eq!(found, created);

    let (_, patched) = send(&app, json_request("PATCH", "/students", r#"{"id":6,"age":23}"#)).await;
    assert_eq!(patched["age"], 23);
    assert_eq!(patched["course"], "Compilers");

    let (_, replaced) = send(&app, json_request("PUT", "/students", r#"{"id":6,"name":"Lu"}"#)).await;
    assert_eq!(
        replaced,
        serde_json::json!({"id":6,"name":"Lu","age":null,"email":null,"course":null})
    );

    let (status, deleted) = send(&app, empty_request("DELETE", "/students/6")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["name"], "Lu");

    let (status, missing) = send(&app, empty_request("GET", "/students/Lu")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(missing, serde_json::Value::Null);

    let (_, list) = send(&app, empty_request("GET", "/students")).await;
    assert_eq!(list.as_array().unwrap().len(), 5);
}

#[rstest]
#[tokio::test]
async fn customer_lifecycle_in_envelope_style() {
    let app = router(AppState::seeded(ResponseStyle::Envelope).await.unwrap());

    let (status, created) = send(
        &app,
        json_request("POST", "/customers", r#"{"id":567,"name":"Lucia","username":"lu","password":"567"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["message"], "Customer created with id: 567");

    let (status, _) = send(
        &app,
        json_request("POST", "/customers", r#"{"id":567,"username":"again"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, updated) = send(
        &app,
        json_request("PUT", "/customers", r#"{"id":567,"name":"Lucía","username":"lu"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["message"], "Customer updated with id: 567");
    assert_eq!(updated["data"]["password"], serde_json::Value::Null);

    let (status, body) = send(&app, empty_request("DELETE", "/customers/567")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, serde_json::Value::Null);

    let (status, missing) = send(&app, empty_request("DELETE", "/customers/567")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(missing["message"], "Customer not found with key: 567");

    let (_, list) = send(&app, empty_request("GET", "/customers")).await;
    assert_eq!(list["data"].as_array().unwrap().len(), 4);
}

#[rstest]
#[tokio::test]
async fn greetings_and_palindromes_are_mounted() {
    let app = router(AppState::seeded(ResponseStyle::Bare).await.unwrap());

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/palindromes/reconocer"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"The word reconocer is a palindrome");

    let response = app
        .oneshot(empty_request("GET", "/greeting/Roberto"))
        .await
        .unwrap();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"Hello, Roberto");
}
