use super::*;
use reviewly::{
    model::auth::LoginForm,
    server::{controller::auth::login, util::password::hash_password},
};

fn login_form(credential: &str, password: &str) -> LoginForm {
    LoginForm {
        credential: credential.to_string(),
        password: password.to_string(),
        csrf_token: None,
    }
}

async fn setup_with_password() -> Result<TestContext, TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let hash = hash_password("password").unwrap();
    test.user().insert_user("alice", &hash).await?;
    issue_csrf(&test).await;

    Ok(test)
}

/// Expect 200 and the user stored in session for a correct password
#[tokio::test]
async fn logs_in_with_correct_password() -> Result<(), TestError> {
    let test = setup_with_password().await?;

    let result = login(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        csrf_headers(),
        Form(login_form("alice", "password")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["username"], "alice");

    let session_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert_eq!(session_user_id, Some(1));

    Ok(())
}

/// Expect email to work as the credential
#[tokio::test]
async fn logs_in_with_email() -> Result<(), TestError> {
    let test = setup_with_password().await?;

    let result = login(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        csrf_headers(),
        Form(login_form("alice@example.com", "password")),
    )
    .await;

    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    Ok(())
}

/// Expect 401 and no session user for a wrong password
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), TestError> {
    let test = setup_with_password().await?;

    let result = login(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        csrf_headers(),
        Form(login_form("alice", "wrong-password")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(resp).await;
    assert_eq!(body["credential"][0], "Invalid credentials.");

    let session_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(session_user_id.is_none());

    Ok(())
}

/// Expect the same 401 for an unknown user as for a wrong password
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), TestError> {
    let test = setup_with_password().await?;

    let result = login(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        csrf_headers(),
        Form(login_form("nobody", "password")),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(resp).await;
    assert_eq!(body["credential"][0], "Invalid credentials.");

    Ok(())
}

/// Expect 400 field errors for missing fields and CSRF cookie
#[tokio::test]
async fn rejects_incomplete_form() -> Result<(), TestError> {
    let test = setup_with_password().await?;

    let result = login(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        HeaderMap::new(),
        Form(login_form("", "")),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = body_json(resp).await;
    assert_eq!(body["credential"][0], "This field is required.");
    assert_eq!(body["password"][0], "This field is required.");
    assert_eq!(body["csrf_token"][0], "The CSRF token is missing.");

    Ok(())
}
