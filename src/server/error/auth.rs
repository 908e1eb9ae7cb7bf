use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use oauth2::{basic::BasicErrorResponse, HttpClientError, RequestTokenError};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Token endpoint error as produced by the oauth2 client over reqwest.
pub type TokenRequestError = RequestTokenError<HttpClientError<reqwest::Error>, BasicErrorResponse>;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No OAuth access token is stored in the session.
    ///
    /// The request came from an anonymous visitor (or the session expired). Results
    /// in a redirect to `/login`, which starts the Discord challenge.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session. Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Exchanging the authorization code for tokens failed.
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchange(#[from] TokenRequestError),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` → 303 redirect to `/login`
/// - `CsrfValidationFailed` / `TokenExchange` → 400 Bad Request with a generic message
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => Redirect::to("/login").into_response(),
            Self::CsrfValidationFailed => login_failed(),
            Self::TokenExchange(err) => {
                tracing::debug!("Token exchange failed: {}", err);
                login_failed()
            }
        }
    }
}

fn login_failed() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorDto {
            error: "There was an issue logging you in, please try again.".to_string(),
        }),
    )
        .into_response()
}
