use super::*;
use reviewly::server::controller::user::list_users;

/// Expect 200 listing exactly the seeded users in ID order
#[tokio::test]
async fn lists_all_users() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_mock_user("alice")
        .with_mock_user("bob")
        .with_mock_user("carol")
        .build()
        .await?;
    log_in(&test, 2).await;

    let result = list_users(
        State(test.to_app_state::<AppState>()),
        current_user(&test).await,
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 3);
    assert_eq!(users[0]["username"], "alice");
    assert_eq!(users[2]["id"], 3);
    assert!(users.iter().all(|u| u.get("hashedPassword").is_none()));

    Ok(())
}

/// Expect 401 when no user is logged in
#[tokio::test]
async fn rejects_unauthenticated_request() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_mock_user("alice")
        .build()
        .await?;

    let result = CurrentUser::from_session(&test.db, &test.session).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(resp).await;
    assert_eq!(body["message"], "Unauthorized");

    Ok(())
}
