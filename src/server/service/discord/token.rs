//! Access-token refresh for calls made with the user's OAuth token.
//!
//! A user call that comes back `401 Unauthorized` is retried exactly once after
//! exchanging the session's refresh token for a new token pair:
//!
//! ```text
//! Initial --(non-401)--------------------------> Done (first response)
//! Initial --(401, no refresh token)------------> Done (first response)
//! Initial --(401, refresh token)--> Retrying --> Done (second response)
//! ```

use std::future::Future;

use oauth2::{RefreshToken, TokenResponse};
use reqwest::StatusCode;

use crate::server::{
    error::AppError, middleware::session::AuthSession, state::OAuth2Client,
};

/// Anything carrying an HTTP status the refresh wrapper can inspect.
pub trait StatusResponse {
    fn status(&self) -> StatusCode;
}

impl StatusResponse for reqwest::Response {
    fn status(&self) -> StatusCode {
        reqwest::Response::status(self)
    }
}

/// Source of the refresh token and sink for renewed tokens.
pub trait TokenRefresher {
    /// The refresh token currently stored for the user, if any.
    fn refresh_token(&self) -> impl Future<Output = Result<Option<String>, AppError>> + Send;

    /// Exchanges `refresh_token` for a new token pair and stores it.
    ///
    /// A failed exchange must leave the stored tokens untouched and return `Ok(())`;
    /// only storage failures are returned as errors.
    fn refresh(&self, refresh_token: &str) -> impl Future<Output = Result<(), AppError>> + Send;
}

enum RefreshState {
    Initial,
    Retrying,
}

/// Runs `request`, refreshing the access token and retrying once on `401`.
///
/// `request` is invoked at most twice and must read the access token anew on every call
/// so the retry picks up the refreshed token. Whatever the second attempt returns is
/// handed back as-is, including another `401`.
///
/// # Arguments
/// - `tokens` - Where the refresh token is read from and renewed tokens are written to
/// - `request` - Produces the request future; called once per attempt
///
/// # Returns
/// - `Ok(R)` - The first response if it was not `401` or no refresh token exists,
///   otherwise the response of the retry
/// - `Err(AppError)` - `request` failed, or the session could not be read or written
pub async fn with_token_refresh<T, F, Fut, R>(tokens: &T, mut request: F) -> Result<R, AppError>
where
    T: TokenRefresher,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<R, AppError>>,
    R: StatusResponse,
{
    let mut state = RefreshState::Initial;

    loop {
        let response = request().await?;

        state = match state {
            RefreshState::Initial if response.status() == StatusCode::UNAUTHORIZED => {
                let Some(refresh_token) = tokens.refresh_token().await? else {
                    return Ok(response);
                };

                tracing::debug!("Access token rejected, refreshing and retrying once");
                tokens.refresh(&refresh_token).await?;

                RefreshState::Retrying
            }
            RefreshState::Initial | RefreshState::Retrying => return Ok(response),
        };
    }
}

/// Refreshes tokens against Discord's token endpoint and stores them in the session.
pub struct SessionTokenRefresher<'a> {
    session: AuthSession<'a>,
    http_client: &'a reqwest::Client,
    oauth_client: &'a OAuth2Client,
}

impl<'a> SessionTokenRefresher<'a> {
    pub fn new(
        session: AuthSession<'a>,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
    ) -> Self {
        Self {
            session,
            http_client,
            oauth_client,
        }
    }

    pub fn session(&self) -> &AuthSession<'a> {
        &self.session
    }
}

impl TokenRefresher for SessionTokenRefresher<'_> {
    async fn refresh_token(&self) -> Result<Option<String>, AppError> {
        self.session.refresh_token().await
    }

    async fn refresh(&self, refresh_token: &str) -> Result<(), AppError> {
        let result = self
            .oauth_client
            .exchange_refresh_token(&RefreshToken::new(refresh_token.to_string()))
            .request_async(self.http_client)
            .await;

        let token = match result {
            Ok(token) => token,
            Err(err) => {
                tracing::warn!("Failed to refresh Discord access token: {}", err);
                return Ok(());
            }
        };

        self.session
            .set_tokens(
                token.access_token().secret().clone(),
                token.refresh_token().map(|t| t.secret().clone()),
            )
            .await?;

        tracing::info!("Refreshed Discord access token");

        Ok(())
    }
}
