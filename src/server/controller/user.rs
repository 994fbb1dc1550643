use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Form, Json,
};
use tower_sessions::Session;
use validator::Validate;

use crate::{
    model::{
        api::{FieldErrorsDto, MessageDto},
        review::ReviewListDto,
        user::{SignUpDto, SignUpForm, UserDto, UserListDto},
    },
    server::{
        controller::util::{
            csrf::{csrf_token_from_cookies, validate_csrf},
            current_user::CurrentUser,
            user_id::UserIdPath,
        },
        error::{form::FormError, Error},
        model::{app::AppState, session::user::SessionUserId},
        service::{
            review::ReviewService,
            user::{user_dto, UserService},
        },
    },
};

pub static USER_TAG: &str = "user";

/// Create a new user account and log it in
///
/// The CSRF token is read from the `csrf_token` cookie and checked against the session.
/// All field errors are reported together.
///
/// # Responses
/// - 201 (Created): User created and stored in session
/// - 400 (Bad Request): One or more fields failed validation
/// - 500 (Internal Server Error): Database, session or password hashing failure
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body(content = SignUpForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "User created and logged in", body = SignUpDto),
        (status = 400, description = "Form validation failed", body = FieldErrorsDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn sign_up(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Form(mut form): Form<SignUpForm>,
) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    form.csrf_token = csrf_token_from_cookies(&headers);

    let mut errors = match form.validate() {
        Ok(()) => FormError::new(),
        Err(e) => FormError::from(e),
    };
    user_service.check_availability(&form, &mut errors).await?;
    validate_csrf(&session, form.csrf_token.as_deref(), &mut errors).await?;
    errors.into_result()?;

    let user = user_service.create_user(&form).await?;

    session.cycle_id().await?;
    SessionUserId::insert(&session, user.id).await?;

    tracing::debug!(user_id = %user.id, "Signed up new user");

    Ok((
        StatusCode::CREATED,
        Json(SignUpDto {
            user: user_dto(user),
        }),
    ))
}

/// List every user
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users ordered by ID", body = UserListDto),
        (status = 401, description = "Not logged in", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn list_users(
    State(state): State<AppState>,
    _current_user: CurrentUser,
) -> Result<impl IntoResponse, Error> {
    let users = UserService::new(&state.db).get_all_users().await?;

    Ok(Json(UserListDto { users }))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 401, description = "Not logged in", body = MessageDto),
        (status = 404, description = "User couldn't be found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    _current_user: CurrentUser,
    UserIdPath(user_id): UserIdPath,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db).get_user(user_id).await?;

    Ok(Json(user_dto(user)))
}

/// Get every review written by a user
///
/// Only the user themselves may list their reviews.
///
/// # Responses
/// - 200 (Success): Reviews ordered by ID with business and user summaries
/// - 401 (Unauthorized): Not logged in
/// - 403 (Forbidden): Logged in as a different user
/// - 404 (Not Found): User does not exist
/// - 500 (Internal Server Error): Database or session failure
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/reviews",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user whose reviews to list")
    ),
    responses(
        (status = 200, description = "The user's reviews", body = ReviewListDto),
        (status = 401, description = "Not logged in", body = MessageDto),
        (status = 403, description = "Reviews belong to another user", body = MessageDto),
        (status = 404, description = "User couldn't be found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_user_reviews(
    State(state): State<AppState>,
    current_user: CurrentUser,
    UserIdPath(user_id): UserIdPath,
) -> Result<impl IntoResponse, Error> {
    let reviews = ReviewService::new(&state.db)
        .get_user_reviews(user_id, current_user.id())
        .await?;

    Ok(Json(ReviewListDto { reviews }))
}
