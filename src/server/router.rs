//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/users` - Sign up
/// - `GET /api/users` - List users
/// - `GET /api/users/{user_id}` - Get a user
/// - `GET /api/users/{user_id}/reviews` - Get a user's own reviews
/// - `GET /api/auth/csrf/restore` - Issue a CSRF token
/// - `GET /api/auth` - Get the logged in user
/// - `POST /api/auth/login` - Log in
/// - `POST /api/auth/logout` - Log out
///
/// The OpenAPI document is served at `/api/docs/openapi.json` and Swagger UI at `/api/docs`.
///
/// The session layer is applied by the caller, so tests can supply an in-memory store.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db }).layer(session);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Reviewly", description = "Reviewly API"), tags(
        (name = controller::user::USER_TAG, description = "User account API routes"),
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::user::sign_up,
            controller::user::list_users
        ))
        .routes(routes!(controller::user::get_user))
        .routes(routes!(controller::user::get_user_reviews))
        .routes(routes!(controller::auth::restore_csrf))
        .routes(routes!(controller::auth::restore_session))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
