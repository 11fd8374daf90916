use crate::shell::config::AppConfig;
use crate::shell::http::router;
use crate::tests::fixtures::stores::make_test_state;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    let config = AppConfig::from_lookup(|_| None).unwrap();
    router(make_test_state(), &config)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

async fn register_alice_with_runs(app: &Router, dates: &[&str]) -> String {
    let (status, user) = send(
        app,
        post_json("/api/exercise/new-user", json!({"username": "alice"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let user_id = user["_id"].as_str().unwrap().to_string();

    for date in dates {
        let (status, _) = send(
            app,
            post_json(
                "/api/exercise/add",
                json!({"userId": user_id, "description": "run", "duration": 30, "date": date}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
    user_id
}

#[tokio::test]
async fn lists_the_log_between_exclusive_bounds() {
    let app = app();
    let user_id =
        register_alice_with_runs(&app, &["2024-01-01", "2024-01-05", "2024-01-10"]).await;

    let (status, log) = send(
        &app,
        get(&format!(
            "/api/exercise/log?userId={user_id}&from=2024-01-01&to=2024-01-10"
        )),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        log,
        json!({
            "_id": user_id,
            "username": "alice",
            "from": "Mon Jan 01 2024",
            "to": "Wed Jan 10 2024",
            "count": 1,
            "log": [{"description": "run", "duration": 30, "date": "Fri Jan 05 2024"}],
        })
    );
}

#[tokio::test]
async fn lists_the_two_most_recent_of_five_entries() {
    let app = app();
    let user_id = register_alice_with_runs(
        &app,
        &[
            "2024-01-03",
            "2024-01-01",
            "2024-01-05",
            "2024-01-02",
            "2024-01-04",
        ],
    )
    .await;

    let (_, log) = send(&app, get(&format!("/api/exercise/log?userId={user_id}&limit=2"))).await;

    assert_eq!(log["count"], 2);
    assert_eq!(
        log["log"],
        json!([
            {"description": "run", "duration": 30, "date": "Fri Jan 05 2024"},
            {"description": "run", "duration": 30, "date": "Thu Jan 04 2024"},
        ])
    );
}

#[tokio::test]
async fn ignores_unparsable_filters() {
    let app = app();
    let user_id = register_alice_with_runs(&app, &["2024-01-01", "2024-01-05"]).await;

    let (_, unfiltered) = send(&app, get(&format!("/api/exercise/log?userId={user_id}"))).await;
    let (status, lenient) = send(
        &app,
        get(&format!(
            "/api/exercise/log?userId={user_id}&from=nope&to=later&limit=abc"
        )),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(lenient, unfiltered);
    assert!(lenient.get("from").is_none());
    assert!(lenient.get("to").is_none());
}

#[tokio::test]
async fn keeps_logs_of_different_users_apart() {
    let app = app();
    let alice = register_alice_with_runs(&app, &["2024-01-01"]).await;
    let (_, bob) = send(
        &app,
        post_json("/api/exercise/new-user", json!({"username": "bob"})),
    )
    .await;
    let bob = bob["_id"].as_str().unwrap();

    let (_, alice_log) = send(&app, get(&format!("/api/exercise/log?userId={alice}"))).await;
    let (_, bob_log) = send(&app, get(&format!("/api/exercise/log?userId={bob}"))).await;
    let (_, users) = send(&app, get("/api/exercise/users")).await;

    assert_eq!(alice_log["count"], 1);
    assert_eq!(bob_log["count"], 0);
    assert_eq!(bob_log["log"], json!([]));
    assert_eq!(users.as_array().map(Vec::len), Some(2));
}
