use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::shared::inbound::response::ResponseStyle;
use crate::shell::http::router;
use crate::shell::state::AppState;

#[tokio::test]
async fn registers_a_club_sharing_the_seeded_association() {
    let app = router(AppState::seeded(ResponseStyle::Bare).await.unwrap());

    let response = app
        .clone()
        .oneshot(
            Request::post("/league/clubs")
                .header("content-type", "application/json")
                .body(Body::from(
                    r#"{"name":"Sevilla","coach":{"name":"Garcia"},"football_association":{"id":1,"name":"RFEF"}}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let club: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(club["id"], 2);
    assert_eq!(club["football_association_id"], 1);

    let response = app
        .oneshot(Request::get("/league/clubs/2").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let roster: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(roster["coach"]["name"], "Garcia");
    assert_eq!(roster["football_association"]["country"], "Spain");
    assert_eq!(roster["players"], serde_json::json!([]));
    assert_eq!(roster["football_competitions"], serde_json::json!([]));
}

#[tokio::test]
async fn serves_the_seeded_roster() {
    let app = router(AppState::seeded(ResponseStyle::Envelope).await.unwrap());

    let response = app
        .oneshot(Request::get("/league/clubs/1").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let roster: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(roster["club"]["name"], "Real Betis");
    assert_eq!(roster["players"].as_array().unwrap().len(), 2);
    assert_eq!(roster["football_competitions"][0]["start_date"], "2024-08-15");
}
