//! Tests for the shift feedback endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use bakeshift::{
    model::feedback::{CreateFeedbackDto, FeedbackQuery},
    server::controller::{
        feedback::{list_feedback, submit_feedback},
        util::extract::{ApiJson, ApiQuery},
    },
};
use chrono::Utc;
use entity::sea_orm_active_enums::{Role, Shift};

use super::*;

/// Expect 201 with the session's shift when the body names none
#[tokio::test]
async fn submit_defaults_to_session_shift() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_bakery_tables()
        .with_user("Baker", Role::SalesRep)
        .build()
        .await?;
    test.login_as(1).await;

    let resp = submit_feedback(
        State(test.into_app_state()),
        test.session.clone(),
        ApiJson(CreateFeedbackDto {
            shift: None,
            note: Some("Mixer is making a noise".to_string()),
        }),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = read_json(resp).await;
    assert_eq!(body["shift"], "morning");
    assert_eq!(body["user_id"], 1);

    Ok(())
}

/// Expect 403 when a sales rep asks for another user's feedback
#[tokio::test]
async fn sales_rep_cannot_list_other_users() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_bakery_tables()
        .with_user("Baker", Role::SalesRep)
        .with_user("Seller", Role::SalesRep)
        .build()
        .await?;
    test.login_as(1).await;

    let result = list_feedback(
        State(test.into_app_state()),
        test.session.clone(),
        ApiQuery(FeedbackQuery {
            user_id: Some(2),
            ..Default::default()
        }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect a manager to list everyone's feedback filtered by shift
#[tokio::test]
async fn manager_lists_all_feedback() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_bakery_tables()
        .with_user("Manager", Role::Manager)
        .with_user("Baker", Role::SalesRep)
        .with_user("Seller", Role::SalesRep)
        .build()
        .await?;
    let now = Utc::now().naive_utc();
    test.bakery()
        .insert_feedback(2, Shift::Night, "Ran out of flour", now)
        .await?;
    test.bakery()
        .insert_feedback(3, Shift::Night, "Oven 1 slow to heat", now)
        .await?;
    test.bakery()
        .insert_feedback(3, Shift::Morning, "All good", now)
        .await?;
    test.login_as(1).await;

    let resp = list_feedback(
        State(test.into_app_state()),
        test.session.clone(),
        ApiQuery(FeedbackQuery {
            shift: Some("night".to_string()),
            ..Default::default()
        }),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await.as_array().unwrap().len(), 2);

    Ok(())
}

/// Expect 400 for a malformed date
#[tokio::test]
async fn rejects_malformed_date() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_bakery_tables()
        .with_user("Manager", Role::Manager)
        .build()
        .await?;
    test.login_as(1).await;

    let result = list_feedback(
        State(test.into_app_state()),
        test.session.clone(),
        ApiQuery(FeedbackQuery {
            date: Some("10/03/2025".to_string()),
            ..Default::default()
        }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
