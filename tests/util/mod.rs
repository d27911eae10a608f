//! Shared helpers for integration tests.

use axum::{body::to_bytes, response::Response};
use bakeshift::server::model::{app::AppState, session::user::SessionUserId};
use bakeshift_test_utils::TestContext;

/// Extension trait for TestContext to build server state and log users in
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;

    /// Put `user_id` in the test session as if they had logged in
    async fn login_as(&self, user_id: i32);
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        self.to_app_state()
    }

    async fn login_as(&self, user_id: i32) {
        SessionUserId::insert(&self.session, user_id)
            .await
            .unwrap();
    }
}

/// Read a response body as JSON
pub async fn read_json(resp: Response) -> serde_json::Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
