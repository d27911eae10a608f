//! Tests for the dashboard endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use bakeshift::server::controller::dashboard::get_staff_online;
use chrono::Utc;
use entity::sea_orm_active_enums::Role;

use super::*;

/// Expect 403 for a sales rep
#[tokio::test]
async fn staff_online_denies_sales_rep() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_bakery_tables()
        .with_user("Baker", Role::SalesRep)
        .build()
        .await?;
    test.login_as(1).await;

    let result = get_staff_online(State(test.into_app_state()), test.session.clone()).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect the owner to see the number of staff with open sessions
#[tokio::test]
async fn staff_online_counts_open_sessions() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_bakery_tables()
        .with_user("Owner", Role::Owner)
        .with_user("Baker", Role::SalesRep)
        .with_user("Seller", Role::SalesRep)
        .build()
        .await?;
    let now = Utc::now().naive_utc();
    test.user().insert_staff_session(2, now, None).await?;
    test.user().insert_staff_session(3, now, Some(now)).await?;
    test.login_as(1).await;

    let resp = get_staff_online(State(test.into_app_state()), test.session.clone())
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["count"], 1);

    Ok(())
}
