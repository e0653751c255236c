use rate_core::model::{BaseRating, ProfileId, RatingSubmission, TagName, TagSet};
use reqwest::StatusCode;
use serde_json::json;
use services::api::IDENTITY_HEADER;
use services::error::FALLBACK_ERROR_MESSAGE;
use std::sync::{Arc, Mutex};

use services::{ClientConfig, HttpRatingApi, RatingApi, RequestError, TokenSource};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer, token: &str) -> HttpRatingApi {
    let config = ClientConfig::new(format!("{}/api", server.uri()))
        .unwrap()
        .with_identity_token(token);
    HttpRatingApi::new(&config).unwrap()
}

#[tokio::test]
async fn random_profile_sends_identity_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/random-profile"))
        .and(header(IDENTITY_HEADER, "user=42&hash=abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "profile": {
                "_id": "P1",
                "name": "Alice",
                "photoUrl": "https://cdn.example/p1.jpg",
                "averageRating": 0,
                "totalRatings": 0
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server, "user=42&hash=abc");
    let profile = api.random_profile().await.unwrap();

    assert_eq!(profile.id().as_str(), "P1");
    assert_eq!(profile.name(), "Alice");
    assert_eq!(profile.total_ratings(), 0);
}

#[tokio::test]
async fn missing_token_sends_empty_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/top-5"))
        .and(header(IDENTITY_HEADER, ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "topUsers": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server, "");
    assert!(api.top_five().await.unwrap().is_empty());
}

#[tokio::test]
async fn token_source_is_read_for_each_request() {
    let server = MockServer::start().await;
    for token in ["first", "second"] {
        Mock::given(method("GET"))
            .and(path("/api/top-5"))
            .and(header(IDENTITY_HEADER, token))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "topUsers": [] })))
            .expect(1)
            .mount(&server)
            .await;
    }

    let current = Arc::new(Mutex::new(String::from("first")));
    let source: TokenSource = {
        let current = Arc::clone(&current);
        Arc::new(move || current.lock().unwrap().clone())
    };
    let api = api_for(&server, "from-config").with_token_source(source);

    api.top_five().await.unwrap();
    *current.lock().unwrap() = "second".into();
    api.top_five().await.unwrap();
}

#[tokio::test]
async fn top_five_reads_top_users() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/top-5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "topUsers": [
                { "_id": "A", "name": "Ann", "photoUrl": "a.jpg", "averageRating": "9.8", "totalRatings": 30 },
                { "_id": "B", "name": "Ben", "photoUrl": "b.jpg", "averageRating": 9.1, "totalRatings": 12 }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server, "");
    let top = api.top_five().await.unwrap();

    assert_eq!(top.len(), 2);
    assert_eq!(top[0].average_rating(), Some(9.8));
    assert_eq!(top[1].name(), "Ben");
}

#[tokio::test]
async fn rate_posts_camel_case_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/rate"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "profileId": "P1",
            "score": 10.0,
            "tags": ["kind"],
            "bonus": 0.5
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    let tags: TagSet = [TagName::new("kind").unwrap()].into_iter().collect();
    let submission = RatingSubmission::build(
        ProfileId::new("P1").unwrap(),
        BaseRating::clamped(10.0).unwrap(),
        &tags,
    );

    let api = api_for(&server, "tok");
    api.rate(&submission).await.unwrap();
}

#[tokio::test]
async fn error_field_becomes_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/rate"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "error": "cannot rate yourself" })),
        )
        .mount(&server)
        .await;

    let submission = RatingSubmission::build(
        ProfileId::new("ME").unwrap(),
        BaseRating::default(),
        &TagSet::new(),
    );
    let api = api_for(&server, "tok");
    let err = api.rate(&submission).await.unwrap_err();

    assert!(matches!(
        err,
        RequestError::Status { status: StatusCode::BAD_REQUEST, .. }
    ));
    assert_eq!(err.message(), "cannot rate yourself");
}

#[tokio::test]
async fn missing_error_field_uses_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/my-profile"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({})))
        .mount(&server)
        .await;

    let api = api_for(&server, "tok");
    let err = api.my_profile().await.unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(err.message(), FALLBACK_ERROR_MESSAGE);
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/random-profile"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let api = api_for(&server, "tok");
    let err = api.random_profile().await.unwrap_err();
    assert!(matches!(err, RequestError::Decode(_)));
}
