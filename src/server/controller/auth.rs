use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::dashboard::HomeDto,
    server::{
        error::{auth::AuthError, AppError},
        middleware::session::{AuthSession, CsrfSession},
        service::auth::AuthService,
        state::AppState,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Where the user lands after signing in.
const POST_LOGIN_REDIRECT: &str = "/";

/// Query parameters for the OAuth callback endpoint.
///
/// # Fields
/// - `state` - CSRF protection token that must match the value stored in the session
/// - `code` - Authorization code used to exchange for access tokens
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code from Discord for token exchange.
    pub code: String,
}

#[utoipa::path(
    get,
    path = "/",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Landing document", body = HomeDto),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn home(session: Session) -> Result<impl IntoResponse, AppError> {
    let authenticated = AuthSession::new(&session).is_authenticated().await?;

    Ok((
        StatusCode::OK,
        Json(HomeDto {
            authenticated,
            login_url: "/login".to_string(),
            dashboard_url: "/dashboard".to_string(),
        }),
    ))
}

/// Starts the Discord OAuth challenge.
#[utoipa::path(
    get,
    path = "/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to Discord's authorization page"),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.http_client, &state.oauth_client);

    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

#[utoipa::path(
    get,
    path = "/signin-discord",
    tag = AUTH_TAG,
    params(
        ("state" = String, Query, description = "CSRF state issued with the challenge"),
        ("code" = String, Query, description = "OAuth2 authorization code")
    ),
    responses(
        (status = 303, description = "Signed in, redirect to home"),
        (status = 400, description = "CSRF mismatch or rejected authorization code", body = crate::model::api::ErrorDto),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    params: Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.http_client, &state.oauth_client);

    validate_csrf(&session, &params.0.state).await?;

    let tokens = auth_service.callback(params.0.code).await?;

    AuthSession::new(&session)
        .set_tokens(tokens.access_token, tokens.refresh_token)
        .await?;

    tracing::info!("User signed in with Discord");

    Ok(Redirect::to(POST_LOGIN_REDIRECT))
}

#[utoipa::path(
    get,
    path = "/logout",
    tag = AUTH_TAG,
    responses(
        (status = 303, description = "Session cleared, redirect to home"),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    tracing::debug!("User signed out");

    Ok(Redirect::to("/"))
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    if let Some(state) = stored_state {
        if state == csrf_state {
            return Ok(());
        }
    }

    Err(AppError::AuthErr(AuthError::CsrfValidationFailed))
}
