use super::*;

/// Tests an authenticated session passes the guard.
///
/// Verifies that the AuthGuard grants access once an access token is stored.
///
/// Expected: Ok(())
#[tokio::test]
async fn grants_access_with_access_token() -> Result<(), AppError> {
    let mut test = TestContext::new();
    let session = test.session().await.unwrap();

    AuthSession::new(session)
        .set_tokens("access".to_string(), Some("refresh".to_string()))
        .await?;

    let result = AuthGuard::new(session).require().await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests an anonymous session is rejected.
///
/// Verifies that the AuthGuard denies access when no tokens were ever stored.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn denies_anonymous_session() -> Result<(), AppError> {
    let mut test = TestContext::new();
    let session = test.session().await.unwrap();

    let result = AuthGuard::new(session).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a signed-out session is rejected.
///
/// Verifies that clearing the session removes authentication.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn denies_session_after_sign_out() -> Result<(), AppError> {
    let mut test = TestContext::new();
    let session = test.session().await.unwrap();

    let auth_session = AuthSession::new(session);
    auth_session
        .set_tokens("access".to_string(), Some("refresh".to_string()))
        .await?;
    auth_session.clear().await?;

    let result = AuthGuard::new(session).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}
