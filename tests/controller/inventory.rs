//! Tests for the remaining bread and available stock endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use bakeshift::{
    model::{
        api::ShiftQuery,
        inventory::{RemainingBreadRequestDto, RemainingItemDto},
    },
    server::{
        controller::{
            inventory::{check_remaining_bread, get_available_stock, submit_remaining_bread},
            util::extract::{ApiJson, ApiQuery},
        },
        util::shift::ShiftClock,
    },
};
use chrono::{TimeDelta, Utc};
use entity::sea_orm_active_enums::{Role, Shift};
use sea_orm::EntityTrait;

use super::*;

fn request(quantity: i32, confirmed: bool) -> RemainingBreadRequestDto {
    RemainingBreadRequestDto {
        shift: Some("morning".to_string()),
        items: vec![RemainingItemDto {
            bread_type_id: 1,
            quantity,
        }],
        confirmed,
    }
}

/// Expect 409 with the conflict report until the repeated count is confirmed
#[tokio::test]
async fn repeated_count_needs_confirmation() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_bakery_tables()
        .with_user("Seller", Role::SalesRep)
        .with_bread_type("Agege", 500.0)
        .build()
        .await?;
    let today = ShiftClock::default().local_date(Utc::now());
    let yesterday = today - TimeDelta::days(1);
    test.bakery()
        .insert_remaining(1, 1, Shift::Morning, 12, yesterday)
        .await?;
    test.login_as(1).await;

    let unconfirmed = submit_remaining_bread(
        State(test.into_app_state()),
        test.session.clone(),
        ApiJson(request(12, false)),
    )
    .await
    .unwrap();
    assert_eq!(unconfirmed.status(), StatusCode::CONFLICT);
    let report = read_json(unconfirmed).await;
    assert_eq!(report["hasConflicts"], true);
    assert_eq!(report["conflicts"][0]["identifier"], 1);
    assert_eq!(report["conflicts"][0]["quantity"], 12);
    assert_eq!(
        report["conflicts"][0]["existingDate"],
        yesterday.format("%Y-%m-%d").to_string()
    );
    assert_eq!(report["conflicts"][0]["originalInput"]["quantity"], 12);

    let confirmed = submit_remaining_bread(
        State(test.into_app_state()),
        test.session.clone(),
        ApiJson(request(12, true)),
    )
    .await
    .unwrap();
    assert_eq!(confirmed.status(), StatusCode::CREATED);
    let saved = read_json(confirmed).await;
    assert_eq!(saved[0]["quantity"], 12);
    assert_eq!(saved[0]["unit_price"], 500.0);

    Ok(())
}

/// Expect a second count on the same day to overwrite the first without confirmation
#[tokio::test]
async fn same_day_count_is_overwritten() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_bakery_tables()
        .with_user("Seller", Role::SalesRep)
        .with_bread_type("Agege", 500.0)
        .build()
        .await?;
    test.login_as(1).await;

    for quantity in [12, 9] {
        let resp = submit_remaining_bread(
            State(test.into_app_state()),
            test.session.clone(),
            ApiJson(request(quantity, false)),
        )
        .await
        .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let records = entity::prelude::RemainingBread::find().all(&test.db).await?;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].quantity, 9);

    Ok(())
}

/// Expect the check endpoint to report without writing anything
#[tokio::test]
async fn check_reports_without_saving() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_bakery_tables()
        .with_user("Seller", Role::SalesRep)
        .with_bread_type("Agege", 500.0)
        .build()
        .await?;
    let yesterday = ShiftClock::default().local_date(Utc::now()) - TimeDelta::days(1);
    test.bakery()
        .insert_remaining(1, 1, Shift::Morning, 7, yesterday)
        .await?;
    test.login_as(1).await;

    let resp = check_remaining_bread(
        State(test.into_app_state()),
        test.session.clone(),
        ApiJson(request(7, false)),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["hasConflicts"], true);
    assert_eq!(entity::prelude::RemainingBread::find().all(&test.db).await?.len(), 1);

    Ok(())
}

/// Expect 400 for an empty submission
#[tokio::test]
async fn rejects_empty_items() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_bakery_tables()
        .with_user("Seller", Role::SalesRep)
        .build()
        .await?;
    test.login_as(1).await;

    let result = submit_remaining_bread(
        State(test.into_app_state()),
        test.session.clone(),
        ApiJson(RemainingBreadRequestDto::default()),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect produced minus sold for the running shift, never below zero
#[tokio::test]
async fn available_stock_for_running_shift() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_bakery_tables()
        .with_user("Seller", Role::SalesRep)
        .with_bread_type("Agege", 500.0)
        .with_bread_type("Coconut", 600.0)
        .build()
        .await?;
    let now = Utc::now();
    let shift = ShiftClock::default().shift_at(now);

    // Fixture batches hold 10 loaves each
    test.bakery().insert_batch(1, 1, shift, "001").await?;
    test.bakery().insert_batch(1, 1, shift, "002").await?;
    test.bakery().insert_batch(2, 1, shift, "001").await?;
    test.bakery()
        .insert_sale(1, 1, shift, 7, now.naive_utc())
        .await?;
    test.bakery()
        .insert_sale(2, 1, shift, 15, now.naive_utc())
        .await?;
    test.login_as(1).await;

    let shift_name = match shift {
        Shift::Morning => "morning",
        Shift::Night => "night",
    };
    let resp = get_available_stock(
        State(test.into_app_state()),
        test.session.clone(),
        ApiQuery(ShiftQuery {
            shift: Some(shift_name.to_string()),
        }),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "Agege");
    assert_eq!(items[0]["available"], 13);
    assert_eq!(items[1]["sold"], 15);
    assert_eq!(items[1]["available"], 0);

    Ok(())
}
