use super::*;

/// Tests that a stored CSRF token can be taken exactly once.
///
/// Expected: Some(token) on first take, None on second
#[tokio::test]
async fn token_is_single_use() -> Result<(), AppError> {
    let mut test = TestContext::new();
    let session = test.session().await.unwrap();
    let csrf_session = CsrfSession::new(session);

    csrf_session.set_token("state-123".to_string()).await?;

    assert_eq!(csrf_session.take_token().await?.as_deref(), Some("state-123"));
    assert!(csrf_session.take_token().await?.is_none());

    Ok(())
}

/// Tests taking a token that was never stored.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_token() -> Result<(), AppError> {
    let mut test = TestContext::new();
    let session = test.session().await.unwrap();

    assert!(CsrfSession::new(session).take_token().await?.is_none());

    Ok(())
}
