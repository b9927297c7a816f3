use axum::{extract::State, http::StatusCode, response::Response};

use crate::modules::records::state::RecordsState;
use crate::shared::core::record::Record;
use crate::shared::inbound::response::respond;

pub async fn handle<R: Record>(State(state): State<RecordsState<R>>) -> Response {
    let records = state.store.list().await;
    respond(state.style, R::NOUN, Ok(records), StatusCode::OK, |records| {
        format!("{} {} records", records.len(), R::NOUN)
    })
}

#[cfg(test)]
mod list_records_http_inbound_tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use rstest::rstest;
    use tower::ServiceExt;

    use crate::modules::customers::core::customer::seed_customers;
    use crate::shared::inbound::response::ResponseStyle;
    use crate::tests::fixtures::records::customers_app;

    #[rstest]
    #[tokio::test]
    async fn it_should_return_200_with_the_seeded_list() {
        let (app, _) = customers_app(ResponseStyle::Bare);
        let response = app
            .oneshot(Request::get("/customers").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, serde_json::to_value(seed_customers()).unwrap());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_wrap_the_list_in_an_envelope() {
        let (app, _) = customers_app(ResponseStyle::Envelope);
        let response = app
            .oneshot(Request::get("/customers").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], 200);
        assert_eq!(json["message"], "4 Customer records");
        assert_eq!(json["data"].as_array().unwrap().len(), 4);
    }
}
