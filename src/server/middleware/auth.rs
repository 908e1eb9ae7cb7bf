use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
};

/// Gate for routes that need a signed-in Discord user.
pub struct AuthGuard<'a> {
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Requires an access token in the session.
    ///
    /// # Returns
    /// - `Ok(())` - The session is authenticated
    /// - `Err(AuthError::UserNotInSession)` - Anonymous session, answered with a login redirect
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn require(&self) -> Result<(), AppError> {
        if !AuthSession::new(self.session).is_authenticated().await? {
            return Err(AuthError::UserNotInSession.into());
        }

        Ok(())
    }
}
