use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap},
    response::IntoResponse,
    Form, Json,
};
use tower_sessions::Session;
use validator::Validate;

use crate::{
    model::{
        api::{FieldErrorsDto, MessageDto},
        auth::{CsrfTokenDto, LoginForm},
        user::UserDto,
    },
    server::{
        controller::util::{
            csrf::{csrf_cookie, csrf_token_from_cookies, generate_csrf_token, validate_csrf},
            current_user::CurrentUser,
        },
        error::{form::FormError, Error},
        model::{
            app::AppState,
            session::{auth::SessionAuthCsrf, user::SessionUserId},
        },
        service::{auth::AuthService, user::user_dto},
    },
};

pub static AUTH_TAG: &str = "auth";

/// Issue a fresh CSRF token
///
/// Stores the token in the session and sets it as the `csrf_token` cookie. Forms must be
/// submitted with this cookie present.
#[utoipa::path(
    get,
    path = "/api/auth/csrf/restore",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Token issued and cookie set", body = CsrfTokenDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn restore_csrf(session: Session) -> Result<impl IntoResponse, Error> {
    let token = generate_csrf_token();

    SessionAuthCsrf::insert(&session, &token).await?;

    Ok((
        [(SET_COOKIE, csrf_cookie(&token).to_string())],
        Json(CsrfTokenDto { csrf_token: token }),
    ))
}

/// Get the logged in user
#[utoipa::path(
    get,
    path = "/api/auth",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged in user", body = UserDto),
        (status = 401, description = "Not logged in", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn restore_session(current_user: CurrentUser) -> Result<impl IntoResponse, Error> {
    Ok(Json(user_dto(current_user.user)))
}

/// Log in with a username or email and password
///
/// # Responses
/// - 200 (Success): Credentials valid, user stored in session
/// - 400 (Bad Request): Missing fields or CSRF failure
/// - 401 (Unauthorized): Unknown credential or wrong password
/// - 500 (Internal Server Error): Database or session failure
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 400, description = "Form validation failed", body = FieldErrorsDto),
        (status = 401, description = "Invalid credentials", body = FieldErrorsDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Form(mut form): Form<LoginForm>,
) -> Result<impl IntoResponse, Error> {
    form.csrf_token = csrf_token_from_cookies(&headers);

    let mut errors = match form.validate() {
        Ok(()) => FormError::new(),
        Err(e) => FormError::from(e),
    };
    validate_csrf(&session, form.csrf_token.as_deref(), &mut errors).await?;
    errors.into_result()?;

    let user = AuthService::new(&state.db)
        .login(&form.credential, &form.password)
        .await?;

    session.cycle_id().await?;
    SessionUserId::insert(&session, user.id).await?;

    Ok(Json(user_dto(user)))
}

/// Log the user out by clearing their session
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let maybe_user_id = SessionUserId::get(&session).await?;

    // Only clear when a user is logged in
    if maybe_user_id.is_some() {
        session.clear().await;
    }

    Ok(Json(MessageDto::new("User logged out")))
}
