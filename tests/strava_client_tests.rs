// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP-level tests of the Strava and OAuth clients.

use serde_json::json;
use strava_renamer::models::ActivityId;
use strava_renamer::services::{
    export_activities, ActivityApi, ActivityUpdate, OAuthClient, Snapshot, StravaClient,
};
use wiremock::matchers::{body_json, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn activity_json(id: u64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "distance": 10012.3,
        "type": "Run",
        "sport_type": "Run",
        "workout_type": 2,
        "start_date": "2024-01-15T10:00:00Z",
        "manual": false,
        "private": false,
        "gear_id": "g42"
    })
}

#[tokio::test]
async fn test_update_sends_name_only() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/activities/12345"))
        .and(header("authorization", "Bearer test-token"))
        .and(body_json(json!({"name": "Evening Run"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(activity_json(12345, "Evening Run")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = StravaClient::with_base_url(mock_server.uri(), "test-token".to_string());
    let updated = client
        .update_activity(
            &ActivityId::from(12345),
            &ActivityUpdate::rename("Evening Run", false),
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Evening Run");
}

#[tokio::test]
async fn test_update_with_empty_description() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/activities/12345"))
        .and(body_json(json!({"name": "Evening Run", "description": ""})))
        .respond_with(ResponseTemplate::new(200).set_body_json(activity_json(12345, "Evening Run")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = StravaClient::with_base_url(mock_server.uri(), "test-token".to_string());
    client
        .update_activity(
            &ActivityId::from(12345),
            &ActivityUpdate::rename("Evening Run", true),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_rate_limit_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;

    let client = StravaClient::with_base_url(mock_server.uri(), "test-token".to_string());
    let err = client
        .update_activity(&ActivityId::from(1), &ActivityUpdate::rename("x", false))
        .await
        .unwrap_err();

    assert!(err.is_strava_rate_limit());
}

#[tokio::test]
async fn test_unauthorized_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/athlete/activities"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let client = StravaClient::with_base_url(mock_server.uri(), "expired".to_string());
    let err = client.list_activities(1, 200).await.unwrap_err();

    assert!(err.is_strava_token_error());
}

#[tokio::test]
async fn test_export_pages_until_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/athlete/activities"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            activity_json(1, "Hills, again"),
            activity_json(2, "Tempo")
        ])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/athlete/activities"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([activity_json(3, "Easy")])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/athlete/activities"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = StravaClient::with_base_url(mock_server.uri(), "test-token".to_string());
    let mut out = Vec::new();
    let count = export_activities(&client, &mut out, 2).await.unwrap();
    assert_eq!(count, 3);

    let text = String::from_utf8(out.clone()).unwrap();
    assert!(text.starts_with(
        "ID,Name,Distance,Type,Workout type,Start date,Was manually added,Is private,Gear ID,Description"
    ));
    assert!(text.contains("1,|Hills, again|,10012.3,Run,2,2024-01-15T10:00:00Z,False,False,g42,"));

    let snapshot = Snapshot::from_reader(out.as_slice()).unwrap();
    let names: Vec<&str> = snapshot.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Hills, again", "Tempo", "Easy"]);
}

#[tokio::test]
async fn test_exchange_code() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .and(body_string_contains("grant_type=authorization_code"))
        .and(body_string_contains("code=abc123"))
        .and(body_string_contains("client_id=42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token_type": "Bearer",
            "access_token": "access",
            "refresh_token": "refresh",
            "expires_at": 1700000000,
            "athlete": {"id": 7}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = OAuthClient::new(mock_server.uri(), "42".to_string(), "secret".to_string());
    let tokens = client.exchange_code("abc123").await.unwrap();

    assert_eq!(tokens.access_token, "access");
    assert_eq!(tokens.refresh_token, "refresh");
    assert_eq!(tokens.expires_at, 1700000000);
}

#[tokio::test]
async fn test_refresh_token_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .and(body_string_contains("grant_type=refresh_token"))
        .respond_with(ResponseTemplate::new(400).set_body_string("invalid_grant"))
        .mount(&mock_server)
        .await;

    let client = OAuthClient::new(mock_server.uri(), "42".to_string(), "secret".to_string());
    let err = client.refresh_token("stale").await.unwrap_err();

    assert!(err.to_string().contains("invalid_grant"));
}
