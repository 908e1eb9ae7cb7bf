use oauth2::{AuthorizationCode, CsrfToken, Scope, TokenResponse};
use url::Url;

use crate::server::{
    error::{auth::AuthError, AppError},
    state::OAuth2Client,
};

/// Token pair issued by Discord for a signed-in user.
#[derive(Debug, Clone)]
pub struct IssuedTokens {
    pub access_token: String,
    pub refresh_token: Option<String>,
}

/// Service for the Discord OAuth2 authorization-code flow.
pub struct AuthService<'a> {
    /// HTTP client used for the token exchange.
    pub http_client: &'a reqwest::Client,
    /// OAuth2 client for Discord authentication flow.
    pub oauth_client: &'a OAuth2Client,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `http_client` - Reference to the HTTP client for the token endpoint
    /// - `oauth_client` - Reference to the configured OAuth2 client
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(http_client: &'a reqwest::Client, oauth_client: &'a OAuth2Client) -> Self {
        Self {
            http_client,
            oauth_client,
        }
    }

    /// Generates a Discord OAuth2 login URL with CSRF protection.
    ///
    /// Requests the `identify` and `guilds` scopes, enough to read the user's profile
    /// and guild list. Returns both the URL and the CSRF token for callback validation.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - Tuple containing the authorization URL and CSRF state token
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("identify".to_string()))
            .add_scope(Scope::new("guilds".to_string()))
            .url()
    }

    /// Exchanges the authorization code from the OAuth2 callback for tokens.
    ///
    /// # Arguments
    /// - `authorization_code` - OAuth2 authorization code from Discord callback
    ///
    /// # Returns
    /// - `Ok(IssuedTokens)` - Access token and, if issued, refresh token
    /// - `Err(AppError::AuthErr(AuthError::TokenExchange))` - Discord rejected the code or
    ///   the token endpoint could not be reached
    pub async fn callback(&self, authorization_code: String) -> Result<IssuedTokens, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(AuthError::from)?;

        Ok(IssuedTokens {
            access_token: token.access_token().secret().clone(),
            refresh_token: token.refresh_token().map(|t| t.secret().clone()),
        })
    }
}
