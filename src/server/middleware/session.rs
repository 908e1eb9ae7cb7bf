//! Type-safe session management wrappers.
//!
//! This module provides type-safe interfaces for managing different aspects of user sessions,
//! organized by concern. Each struct wraps the request's `Session` by reference and exposes
//! only the methods relevant to its concern:
//! - `AuthSession` - OAuth tokens identifying the signed-in user
//! - `CsrfSession` - CSRF token management for the OAuth challenge

use tower_sessions::Session;

use crate::server::error::AppError;

// Session key constants
const SESSION_AUTH_ACCESS_TOKEN: &str = "auth:access_token";
const SESSION_AUTH_REFRESH_TOKEN: &str = "auth:refresh_token";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";

/// Authentication session management.
///
/// Holds the Discord access and refresh tokens issued to the signed-in user. A session
/// with an access token is considered authenticated.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores a freshly issued token pair.
    ///
    /// The refresh token is only overwritten when one is provided; Discord may omit it
    /// from a refresh response, in which case the previous one stays valid.
    ///
    /// # Arguments
    /// - `access_token` - New OAuth access token
    /// - `refresh_token` - New OAuth refresh token, if issued
    ///
    /// # Returns
    /// - `Ok(())` - Tokens successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_tokens(
        &self,
        access_token: String,
        refresh_token: Option<String>,
    ) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_ACCESS_TOKEN, access_token)
            .await?;

        if let Some(refresh_token) = refresh_token {
            self.session
                .insert(SESSION_AUTH_REFRESH_TOKEN, refresh_token)
                .await?;
        }

        Ok(())
    }

    /// Retrieves the user's current access token.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - User is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn access_token(&self) -> Result<Option<String>, AppError> {
        Ok(self.session.get::<String>(SESSION_AUTH_ACCESS_TOKEN).await?)
    }

    /// Retrieves the user's refresh token, if Discord issued one.
    pub async fn refresh_token(&self) -> Result<Option<String>, AppError> {
        Ok(self
            .session
            .get::<String>(SESSION_AUTH_REFRESH_TOKEN)
            .await?)
    }

    /// Checks if a user is currently logged in.
    pub async fn is_authenticated(&self) -> Result<bool, AppError> {
        Ok(self.access_token().await?.is_some())
    }

    /// Signs the user out.
    ///
    /// Deletes the session from the store and expires the session cookie.
    pub async fn clear(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}

/// CSRF protection session management.
///
/// Tokens are stored during login initiation and validated during the OAuth callback.
pub struct CsrfSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    /// Creates a new CsrfSession wrapper.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores a CSRF token in the session.
    ///
    /// # Arguments
    /// - `token` - The CSRF token to store
    ///
    /// # Returns
    /// - `Ok(())` - Token successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token from the session.
    ///
    /// Each token can only be used once.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - CSRF token was found and removed
    /// - `Ok(None)` - No CSRF token in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}
