use super::*;
use reviewly::{model::user::SignUpForm, server::controller::user::sign_up};
use sea_orm::{EntityTrait, PaginatorTrait};

fn sign_up_form(username: &str, email: &str) -> SignUpForm {
    SignUpForm {
        username: username.to_string(),
        email: email.to_string(),
        password: "password".to_string(),
        first_name: "Alice".to_string(),
        last_name: "Liddell".to_string(),
        csrf_token: None,
    }
}

/// Expect 201 with the new user, logged in on the session
#[tokio::test]
async fn creates_and_logs_in_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    issue_csrf(&test).await;

    let result = sign_up(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        csrf_headers(),
        Form(sign_up_form("alice", "alice@example.com")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = body_json(resp).await;
    assert_eq!(body["user"]["id"], 1);
    assert_eq!(body["user"]["username"], "alice");
    assert_eq!(body["user"]["firstName"], "Alice");
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("hashedPassword").is_none());

    let session_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert_eq!(session_user_id, Some(1));

    Ok(())
}

/// Expect 400 with a username error and no new row for a taken username
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_mock_user("alice")
        .build()
        .await?;
    issue_csrf(&test).await;

    let result = sign_up(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        csrf_headers(),
        Form(sign_up_form("alice", "new@example.com")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = body_json(resp).await;
    assert_eq!(body["username"][0], "Username is already in use.");
    assert!(body.get("email").is_none());

    let user_count = entity::prelude::User::find().count(&test.db).await?;
    assert_eq!(user_count, 1);

    Ok(())
}

/// Expect 400 with an email error for a taken email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_mock_user("alice")
        .build()
        .await?;
    issue_csrf(&test).await;

    let result = sign_up(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        csrf_headers(),
        Form(sign_up_form("alicia", "alice@example.com")),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = body_json(resp).await;
    assert_eq!(body["email"][0], "Email address is already in use.");

    Ok(())
}

/// Expect 400 with a csrf_token error when no cookie is sent
#[tokio::test]
async fn rejects_missing_csrf_cookie() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    issue_csrf(&test).await;

    let result = sign_up(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        HeaderMap::new(),
        Form(sign_up_form("alice", "alice@example.com")),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = body_json(resp).await;
    assert_eq!(body["csrf_token"][0], "The CSRF token is missing.");

    let session_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(session_user_id.is_none());

    Ok(())
}

/// Expect 400 with a csrf_token error when the cookie does not match the session
#[tokio::test]
async fn rejects_mismatched_csrf_token() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    reviewly::server::model::session::auth::SessionAuthCsrf::insert(
        &test.session,
        "a_different_token",
    )
    .await
    .unwrap();

    let result = sign_up(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        csrf_headers(),
        Form(sign_up_form("alice", "alice@example.com")),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = body_json(resp).await;
    assert_eq!(body["csrf_token"][0], "The CSRF tokens do not match.");

    let user_count = entity::prelude::User::find().count(&test.db).await?;
    assert_eq!(user_count, 0);

    Ok(())
}

/// Expect every failing field to be reported at once
#[tokio::test]
async fn reports_all_field_errors() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    issue_csrf(&test).await;

    let form = SignUpForm {
        username: String::new(),
        email: "not-an-email".to_string(),
        password: "short".to_string(),
        first_name: String::new(),
        last_name: "L".repeat(41),
        csrf_token: None,
    };

    let result = sign_up(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        csrf_headers(),
        Form(form),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = body_json(resp).await;
    assert_eq!(body["username"][0], "This field is required.");
    assert_eq!(body["first_name"][0], "This field is required.");
    assert!(body.get("email").is_some());
    assert!(body.get("password").is_some());
    assert!(body.get("last_name").is_some());
    assert!(body.get("csrf_token").is_none());

    Ok(())
}

/// Expect 500 when required database tables are not present
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    issue_csrf(&test).await;

    let result = sign_up(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        csrf_headers(),
        Form(sign_up_form("alice", "alice@example.com")),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(resp).await;
    assert_eq!(body["message"], "Internal server error");

    Ok(())
}
