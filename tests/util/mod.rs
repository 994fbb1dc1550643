//! Shared helpers for controller and router tests.

mod app;

pub use app::TestApp;

use axum::{
    body::{to_bytes, Body},
    http::{header::COOKIE, HeaderMap, HeaderValue},
    response::Response,
};
use reviewly::server::model::session::{auth::SessionAuthCsrf, user::SessionUserId};
use reviewly_test_utils::prelude::*;
use serde_json::Value;

/// Headers carrying the test CSRF token as the `csrf_token` cookie.
pub fn csrf_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        COOKIE,
        HeaderValue::from_str(&format!("csrf_token={}", TEST_CSRF_TOKEN)).unwrap(),
    );
    headers
}

/// Stores the test CSRF token in the context's session.
pub async fn issue_csrf(test: &TestContext) {
    SessionAuthCsrf::insert(&test.session, TEST_CSRF_TOKEN)
        .await
        .unwrap();
}

/// Logs `user_id` in on the context's session.
pub async fn log_in(test: &TestContext, user_id: i32) {
    SessionUserId::insert(&test.session, user_id).await.unwrap();
}

/// Reads a response body as JSON, `Value::Null` when it is empty or not JSON.
pub async fn body_json(resp: Response<Body>) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap_or(Value::Null)
}
