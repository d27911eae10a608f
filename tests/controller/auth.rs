//! Tests for the auth endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use bakeshift::{
    model::user::LoginDto,
    server::{
        controller::{
            auth::{get_user, login, logout},
            util::extract::ApiJson,
        },
        model::session::{staff::SessionStaffSessionId, user::SessionUserId},
    },
};
use bakeshift_test_utils::fixtures::user::test_email;
use entity::sea_orm_active_enums::Role;
use sea_orm::EntityTrait;

use super::*;

/// Expect 200 with the user, and the user and staff session stored in the session
#[tokio::test]
async fn login_starts_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_bakery_tables()
        .with_user("Baker", Role::SalesRep)
        .build()
        .await?;

    let resp = login(
        State(test.into_app_state()),
        test.session.clone(),
        ApiJson(LoginDto {
            email: Some(test_email("Baker")),
            password: Some(TEST_PASSWORD.to_string()),
        }),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["role"], "sales_rep");
    assert!(body.get("password_hash").is_none());

    assert_eq!(SessionUserId::get(&test.session).await.unwrap(), Some(1));
    assert!(SessionStaffSessionId::get(&test.session)
        .await
        .unwrap()
        .is_some());

    Ok(())
}

/// Expect 401 with a generic message for a wrong password
#[tokio::test]
async fn login_rejects_wrong_password() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_bakery_tables()
        .with_user("Baker", Role::SalesRep)
        .build()
        .await?;

    let result = login(
        State(test.into_app_state()),
        test.session.clone(),
        ApiJson(LoginDto {
            email: Some(test_email("Baker")),
            password: Some("wrong".to_string()),
        }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(read_json(resp).await["error"], "Invalid email or password");
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

/// Expect 204 after logout even without session data
///
/// Clearing a session without any data in it errors, so the endpoint only clears the
/// session when a user is in it.
#[tokio::test]
async fn logout_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_bakery_tables().build().await?;

    let resp = logout(State(test.into_app_state()), test.session.clone())
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}

/// Expect logout to clear the session and close the staff session
#[tokio::test]
async fn logout_ends_staff_session() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_bakery_tables()
        .with_user("Baker", Role::SalesRep)
        .build()
        .await?;
    let staff_session = test
        .user()
        .insert_staff_session(1, chrono::Utc::now().naive_utc(), None)
        .await?;
    test.login_as(1).await;
    SessionStaffSessionId::insert(&test.session, staff_session.id)
        .await
        .unwrap();

    let resp = logout(State(test.into_app_state()), test.session.clone())
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    let closed = entity::prelude::StaffSession::find_by_id(staff_session.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert!(closed.ended_at.is_some());

    Ok(())
}

/// Expect 401 from the current user endpoint when not logged in
#[tokio::test]
async fn get_user_requires_login() -> Result<(), TestError> {
    let test = TestBuilder::new().with_bakery_tables().build().await?;

    let result = get_user(State(test.into_app_state()), test.session.clone()).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
