//! Tests for the batch endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use bakeshift::{
    model::{
        api::ShiftQuery,
        batch::{CreateBatchDto, UpdateBatchDto, VerifyDeletionQuery},
    },
    server::controller::{
        batch::{create_batch, get_batch_stats, update_batch, verify_deletion},
        util::extract::{ApiJson, ApiPath, ApiQuery},
    },
};
use entity::sea_orm_active_enums::{Role, Shift};

use super::*;

fn morning_batch(quantity: i32) -> CreateBatchDto {
    CreateBatchDto {
        bread_type_id: Some(1),
        actual_quantity: Some(quantity),
        shift: Some("morning".to_string()),
        ..Default::default()
    }
}

/// Expect 201 with sequential batch numbers for the same bread type and shift
#[tokio::test]
async fn numbers_batches_sequentially() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_bakery_tables()
        .with_user("Baker", Role::SalesRep)
        .with_bread_type("Agege", 500.0)
        .build()
        .await?;
    test.login_as(1).await;

    let first = create_batch(
        State(test.into_app_state()),
        test.session.clone(),
        ApiJson(morning_batch(40)),
    )
    .await
    .unwrap()
    .into_response();
    let second = create_batch(
        State(test.into_app_state()),
        test.session.clone(),
        ApiJson(morning_batch(60)),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(first.status(), StatusCode::CREATED);
    assert_eq!(second.status(), StatusCode::CREATED);
    assert_eq!(read_json(first).await["batch_number"], "001");

    let second = read_json(second).await;
    assert_eq!(second["batch_number"], "002");
    assert_eq!(second["target_quantity"], 60);
    assert_eq!(second["status"], "active");

    Ok(())
}

/// Expect 400 naming the shift when it is missing from the body
#[tokio::test]
async fn rejects_missing_shift() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_bakery_tables()
        .with_user("Baker", Role::SalesRep)
        .with_bread_type("Agege", 500.0)
        .build()
        .await?;
    test.login_as(1).await;

    let result = create_batch(
        State(test.into_app_state()),
        test.session.clone(),
        ApiJson(CreateBatchDto {
            shift: None,
            ..morning_batch(40)
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = read_json(resp).await;
    assert_eq!(body["error"], "Invalid request");
    assert!(body["details"].as_str().unwrap().contains("shift"));

    Ok(())
}

/// Expect 400 for a shift outside morning and night
#[tokio::test]
async fn rejects_invalid_shift() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_bakery_tables()
        .with_user("Baker", Role::SalesRep)
        .with_bread_type("Agege", 500.0)
        .build()
        .await?;
    test.login_as(1).await;

    let result = create_batch(
        State(test.into_app_state()),
        test.session.clone(),
        ApiJson(CreateBatchDto {
            shift: Some("afternoon".to_string()),
            ..morning_batch(40)
        }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 401 without a logged in user
#[tokio::test]
async fn requires_login() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_bakery_tables()
        .with_bread_type("Agege", 500.0)
        .build()
        .await?;

    let result = create_batch(
        State(test.into_app_state()),
        test.session.clone(),
        ApiJson(morning_batch(40)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(read_json(resp).await["error"], "Authentication required");

    Ok(())
}

/// Expect 404 when updating a batch created by someone else
#[tokio::test]
async fn update_hides_other_users_batches() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_bakery_tables()
        .with_user("Baker", Role::SalesRep)
        .with_user("Other Baker", Role::SalesRep)
        .with_bread_type("Agege", 500.0)
        .build()
        .await?;
    let batch = test.bakery().insert_batch(1, 2, Shift::Morning, "001").await?;
    test.login_as(1).await;

    let result = update_batch(
        State(test.into_app_state()),
        test.session.clone(),
        ApiPath(batch.id),
        ApiJson(UpdateBatchDto {
            status: Some("completed".to_string()),
            ..Default::default()
        }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect completing a batch to stamp its end time
#[tokio::test]
async fn update_completes_batch() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_bakery_tables()
        .with_user("Baker", Role::SalesRep)
        .with_bread_type("Agege", 500.0)
        .build()
        .await?;
    let batch = test.bakery().insert_batch(1, 1, Shift::Morning, "001").await?;
    test.login_as(1).await;

    let resp = update_batch(
        State(test.into_app_state()),
        test.session.clone(),
        ApiPath(batch.id),
        ApiJson(UpdateBatchDto {
            status: Some("completed".to_string()),
            actual_quantity: Some(48),
            ..Default::default()
        }),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["status"], "completed");
    assert_eq!(body["actual_quantity"], 48);
    assert!(!body["end_time"].is_null());

    Ok(())
}

/// Expect 403 when a sales rep verifies another user's deletion
#[tokio::test]
async fn verify_deletion_of_other_user_requires_supervisor() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_bakery_tables()
        .with_user("Baker", Role::SalesRep)
        .with_user("Manager", Role::Manager)
        .build()
        .await?;
    test.login_as(1).await;

    let result = verify_deletion(
        State(test.into_app_state()),
        test.session.clone(),
        ApiQuery(VerifyDeletionQuery {
            shift: Some("night".to_string()),
            user_id: Some(2),
        }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect a manager to verify a sales rep's deletion
#[tokio::test]
async fn manager_verifies_deletion_of_other_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_bakery_tables()
        .with_user("Baker", Role::SalesRep)
        .with_user("Manager", Role::Manager)
        .with_bread_type("Agege", 500.0)
        .build()
        .await?;
    test.bakery().insert_batch(1, 1, Shift::Night, "001").await?;
    test.login_as(2).await;

    let resp = verify_deletion(
        State(test.into_app_state()),
        test.session.clone(),
        ApiQuery(VerifyDeletionQuery {
            shift: Some("night".to_string()),
            user_id: Some(1),
        }),
    )
    .await
    .unwrap()
    .into_response();

    let body = read_json(resp).await;
    assert_eq!(body["verified"], false);
    assert_eq!(body["remaining"], 1);

    Ok(())
}

/// Expect a sales rep's stats to only cover their own batches
#[tokio::test]
async fn stats_are_scoped_by_role() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_bakery_tables()
        .with_user("Baker", Role::SalesRep)
        .with_user("Owner", Role::Owner)
        .with_bread_type("Agege", 500.0)
        .build()
        .await?;
    test.bakery().insert_batch(1, 1, Shift::Morning, "001").await?;
    test.bakery().insert_batch(1, 2, Shift::Morning, "002").await?;
    test.bakery().insert_batch(1, 2, Shift::Night, "001").await?;

    test.login_as(1).await;
    let own = get_batch_stats(
        State(test.into_app_state()),
        test.session.clone(),
        ApiQuery(ShiftQuery::default()),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(read_json(own).await["total_batches"], 1);

    test.login_as(2).await;
    let all = get_batch_stats(
        State(test.into_app_state()),
        test.session.clone(),
        ApiQuery(ShiftQuery::default()),
    )
    .await
    .unwrap()
    .into_response();
    let all = read_json(all).await;
    assert_eq!(all["total_batches"], 3);
    assert_eq!(all["by_shift"]["morning"], 2);
    assert_eq!(all["by_shift"]["night"], 1);

    Ok(())
}
