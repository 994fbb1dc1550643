use super::*;
use reviewly::server::controller::user::get_user;

/// Expect 200 with the user's public representation
#[tokio::test]
async fn returns_existing_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_mock_user("alice")
        .with_mock_user("bob")
        .build()
        .await?;
    log_in(&test, 1).await;

    let result = get_user(
        State(test.to_app_state::<AppState>()),
        current_user(&test).await,
        UserIdPath(2),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["id"], 2);
    assert_eq!(body["username"], "bob");
    assert_eq!(body["email"], "bob@example.com");
    assert_eq!(body["lastName"], "bob");

    Ok(())
}

/// Expect 404 for an unknown user ID
#[tokio::test]
async fn returns_not_found_for_unknown_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_mock_user("alice")
        .build()
        .await?;
    log_in(&test, 1).await;

    let result = get_user(
        State(test.to_app_state::<AppState>()),
        current_user(&test).await,
        UserIdPath(999),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = body_json(resp).await;
    assert_eq!(body["message"], "User couldn't be found");

    Ok(())
}
