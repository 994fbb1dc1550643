use super::*;
use reviewly::server::controller::auth::logout;

/// Expect 200 and the user cleared from session
#[tokio::test]
async fn clears_logged_in_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    log_in(&test, 1).await;

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["message"], "User logged out");

    let maybe_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(maybe_user_id.is_none());

    Ok(())
}

/// Expect 200 even without a logged in user
#[tokio::test]
async fn succeeds_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = logout(test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
