//! Tests for the shift endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use bakeshift::{
    model::shift::{EndShiftDto, SelectShiftDto},
    server::{
        controller::{
            shift::{end_shift, get_current_shift, select_shift},
            util::extract::ApiJson,
        },
        model::session::shift::SessionShift,
    },
};
use entity::sea_orm_active_enums::{Role, Shift};
use sea_orm::EntityTrait;

use super::*;

/// Expect the selected shift to be stored in the session and reported back
#[tokio::test]
async fn selects_shift_for_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_bakery_tables()
        .with_user("Baker", Role::SalesRep)
        .build()
        .await?;
    test.login_as(1).await;

    let resp = select_shift(
        State(test.into_app_state()),
        test.session.clone(),
        ApiJson(SelectShiftDto {
            shift: Some("night".to_string()),
        }),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(SessionShift::get(&test.session).await.unwrap(), Shift::Night);

    let current = get_current_shift(State(test.into_app_state()), test.session.clone())
        .await
        .unwrap()
        .into_response();
    assert_eq!(read_json(current).await["selected"], "night");

    Ok(())
}

/// Expect 400 when selecting without a shift
#[tokio::test]
async fn select_requires_shift() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_bakery_tables()
        .with_user("Baker", Role::SalesRep)
        .build()
        .await?;
    test.login_as(1).await;

    let result = select_shift(
        State(test.into_app_state()),
        test.session.clone(),
        ApiJson(SelectShiftDto { shift: None }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect ending the session's shift to delete the caller's batches and sales for it
#[tokio::test]
async fn end_shift_clears_own_records() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_bakery_tables()
        .with_user("Baker", Role::SalesRep)
        .with_bread_type("Agege", 500.0)
        .build()
        .await?;
    test.bakery().insert_batch(1, 1, Shift::Morning, "001").await?;
    test.bakery().insert_batch(1, 1, Shift::Morning, "002").await?;
    test.bakery().insert_batch(1, 1, Shift::Night, "001").await?;
    test.login_as(1).await;

    let resp = end_shift(
        State(test.into_app_state()),
        test.session.clone(),
        ApiJson(EndShiftDto { shift: None }),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["shift"], "morning");
    assert_eq!(body["batches_deleted"], 2);
    assert_eq!(entity::prelude::Batch::find().all(&test.db).await?.len(), 1);

    Ok(())
}
