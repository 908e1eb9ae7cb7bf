use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Discord answered a proxied request with a non-success status.
#[derive(Error, Debug)]
#[error("Discord API returned {status} for {endpoint}: {body}")]
pub struct DiscordApiError {
    /// Status code returned by Discord.
    pub status: StatusCode,
    /// Endpoint path relative to the API base, e.g. `guilds/123/members`.
    pub endpoint: String,
    /// Raw response body, kept for logging only.
    pub body: String,
}

/// Maps upstream failures onto client-facing statuses.
///
/// - 401 → 401, the user's Discord authorization is no longer valid
/// - 403 / 404 → 404, the guild or channel is not visible to the bot
/// - anything else → 502 Bad Gateway
impl IntoResponse for DiscordApiError {
    fn into_response(self) -> Response {
        tracing::warn!("{}", self);

        let (status, message) = match self.status {
            StatusCode::UNAUTHORIZED => (
                StatusCode::UNAUTHORIZED,
                "Discord authorization expired, please log in again.",
            ),
            StatusCode::FORBIDDEN | StatusCode::NOT_FOUND => {
                (StatusCode::NOT_FOUND, "Resource not found on Discord.")
            }
            _ => (StatusCode::BAD_GATEWAY, "Discord request failed."),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
