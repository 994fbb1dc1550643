use std::collections::BTreeMap;

use axum::{
    body::Body,
    http::{
        header::{CONTENT_TYPE, COOKIE, SET_COOKIE},
        Method, Request, StatusCode,
    },
    Router,
};
use reviewly::server::{model::app::AppState, router::routes};
use reviewly_test_utils::prelude::*;
use serde_json::Value;
use tower::ServiceExt;
use tower_sessions::{cookie::Cookie, MemoryStore, SessionManagerLayer};

use super::body_json;

/// The full router over an in-memory session store, with a cookie jar shared across requests.
pub struct TestApp {
    router: Router,
    cookies: BTreeMap<String, String>,
}

impl TestApp {
    pub fn new(test: &TestContext) -> Self {
        let session = SessionManagerLayer::new(MemoryStore::default()).with_secure(false);

        let router = routes()
            .with_state(test.to_app_state::<AppState>())
            .layer(session);

        Self {
            router,
            cookies: BTreeMap::new(),
        }
    }

    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }

    pub async fn get(&mut self, uri: &str) -> (StatusCode, Value) {
        let request = self.request(Method::GET, uri).body(Body::empty()).unwrap();

        self.send(request).await
    }

    pub async fn post_form(&mut self, uri: &str, form: &[(&str, &str)]) -> (StatusCode, Value) {
        let body = form
            .iter()
            .map(|(key, value)| format!("{}={}", key, value.replace('@', "%40")))
            .collect::<Vec<_>>()
            .join("&");

        let request = self
            .request(Method::POST, uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap();

        self.send(request).await
    }

    /// Fetches a CSRF token so following form posts pass the check.
    pub async fn restore_csrf(&mut self) -> String {
        let (status, body) = self.get("/api/auth/csrf/restore").await;
        assert_eq!(status, StatusCode::OK);

        body["csrf_token"].as_str().unwrap().to_string()
    }

    fn request(&self, method: Method, uri: &str) -> axum::http::request::Builder {
        let builder = Request::builder().method(method).uri(uri);

        if self.cookies.is_empty() {
            return builder;
        }

        let cookie_header = self
            .cookies
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join("; ");

        builder.header(COOKIE, cookie_header)
    }

    async fn send(&mut self, request: Request<Body>) -> (StatusCode, Value) {
        let resp = self.router.clone().oneshot(request).await.unwrap();

        for value in resp.headers().get_all(SET_COOKIE) {
            let Ok(cookie) = Cookie::parse(value.to_str().unwrap().to_string()) else {
                continue;
            };

            let removed = cookie.value().is_empty()
                || cookie.max_age() == Some(time::Duration::ZERO);
            if removed {
                self.cookies.remove(cookie.name());
            } else {
                self.cookies
                    .insert(cookie.name().to_string(), cookie.value().to_string());
            }
        }

        let status = resp.status();
        (status, body_json(resp).await)
    }
}
