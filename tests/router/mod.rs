//! End-to-end tests driving the full router with a cookie session.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use bakeshift::server::{model::app::AppState, router::routes};
use bakeshift_test_utils::{fixtures::user::test_email, prelude::*};
use entity::sea_orm_active_enums::Role;
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::{util::read_json, TestContextExt};

fn app(state: AppState) -> Router {
    routes()
        .with_state(state)
        .layer(SessionManagerLayer::new(MemoryStore::default()).with_secure(false))
}

fn json_request(method: Method, uri: &str, cookie: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    builder.body(Body::from(body.to_string())).unwrap()
}

/// Log in through the API and return the session cookie
async fn login(app: &Router, name: &str) -> String {
    let resp = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/auth/login",
            None,
            serde_json::json!({ "email": test_email(name), "password": TEST_PASSWORD }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    let set_cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();

    set_cookie.split(';').next().unwrap().to_string()
}

/// Expect the first batch of a bread type and shift to be 001 and the next 002
#[tokio::test]
async fn creates_sequential_batches() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_bakery_tables()
        .with_user("Baker", Role::SalesRep)
        .with_bread_type("Agege", 500.0)
        .build()
        .await?;
    let app = app(test.into_app_state());
    let cookie = login(&app, "Baker").await;

    let mut numbers = Vec::new();
    for quantity in [40, 55] {
        let resp = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/api/batches",
                Some(&cookie),
                serde_json::json!({
                    "bread_type_id": 1,
                    "actual_quantity": quantity,
                    "shift": "morning",
                }),
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::CREATED);
        numbers.push(read_json(resp).await["batch_number"].clone());
    }

    assert_eq!(numbers, vec!["001", "002"]);

    let preview = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/batches/generate-number/1?shift=morning")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(read_json(preview).await["batch_number"], "003");

    Ok(())
}

/// Expect 401 with the error envelope when calling without a session cookie
#[tokio::test]
async fn rejects_requests_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_bakery_tables().build().await?;
    let app = app(test.into_app_state());

    let resp = app
        .oneshot(json_request(
            Method::POST,
            "/api/batches",
            None,
            serde_json::json!({ "bread_type_id": 1, "actual_quantity": 1, "shift": "morning" }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(read_json(resp).await["error"], "Authentication required");

    Ok(())
}

/// Expect 403 for a sales rep on the staff online endpoint
#[tokio::test]
async fn staff_online_is_supervisor_only() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_bakery_tables()
        .with_user("Baker", Role::SalesRep)
        .with_user("Owner", Role::Owner)
        .build()
        .await?;
    let app = app(test.into_app_state());

    let request = |cookie: &str| {
        Request::builder()
            .uri("/api/dashboard/staff-online")
            .header(header::COOKIE, cookie)
            .body(Body::empty())
            .unwrap()
    };

    let baker = login(&app, "Baker").await;
    let denied = app.clone().oneshot(request(&baker)).await.unwrap();
    assert_eq!(denied.status(), StatusCode::FORBIDDEN);

    let owner = login(&app, "Owner").await;
    let allowed = app.clone().oneshot(request(&owner)).await.unwrap();
    assert_eq!(allowed.status(), StatusCode::OK);
    // Both logins opened a staff session
    assert_eq!(read_json(allowed).await["count"], 2);

    Ok(())
}

/// Expect the OpenAPI document to be served
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().with_bakery_tables().build().await?;
    let app = app(test.into_app_state());

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let doc = read_json(resp).await;
    assert!(doc["paths"]["/api/batches"]["post"].is_object());
    assert!(doc["paths"]["/api/remaining-bread"]["post"].is_object());

    Ok(())
}

/// Expect malformed bodies, query strings and path parameters to get the 400 error envelope
#[tokio::test]
async fn rejects_malformed_input_with_error_envelope() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_bakery_tables()
        .with_user("Baker", Role::SalesRep)
        .with_bread_type("Agege", 500.0)
        .build()
        .await?;
    let app = app(test.into_app_state());
    let cookie = login(&app, "Baker").await;

    let mistyped = json_request(
        Method::POST,
        "/api/batches",
        Some(&cookie),
        serde_json::json!({ "bread_type_id": 1, "actual_quantity": "fifty", "shift": "morning" }),
    );

    let mut not_json = json_request(
        Method::POST,
        "/api/batches",
        Some(&cookie),
        serde_json::json!({}),
    );
    *not_json.body_mut() = Body::from("not json");

    let get = |uri: &str| {
        Request::builder()
            .uri(uri)
            .header(header::COOKIE, &cookie)
            .body(Body::empty())
            .unwrap()
    };

    for request in [
        mistyped,
        not_json,
        get("/api/batches/verify-deletion?shift=morning&userId=abc"),
        get("/api/batches/generate-number/abc?shift=morning"),
    ] {
        let resp = app.clone().oneshot(request).await.unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/json");

        let body = read_json(resp).await;
        assert_eq!(body["error"], "Invalid request");
        assert!(body["details"].as_str().unwrap().starts_with("Malformed"));
    }

    Ok(())
}
