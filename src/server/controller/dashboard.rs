use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Form, Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::ToSchema;

use crate::{
    model::{
        api::ErrorDto,
        dashboard::{DashboardSelectorDto, GuildDashboardDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::addon::AddonSelections,
        service::{addon::AddonService, dashboard::DashboardService},
        state::AppState,
    },
};

pub static DASHBOARD_TAG: &str = "dashboard";

/// Addon form submitted from the guild dashboard.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddonForm {
    pub tic_tac_toe_addon: String,
    pub economy_addon: String,
    pub leveling_addon: String,
    pub ticketing_addon: String,
}

impl From<AddonForm> for AddonSelections {
    fn from(form: AddonForm) -> Self {
        Self {
            tic_tac_toe: form.tic_tac_toe_addon,
            economy: form.economy_addon,
            leveling: form.leveling_addon,
            ticketing: form.ticketing_addon,
        }
    }
}

/// Message form submitted from the guild dashboard.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageForm {
    pub channel_id: String,
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/dashboard",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Guild selector", body = DashboardSelectorDto),
        (status = 303, description = "Not signed in, redirect to /login"),
        (status = 401, description = "Discord rejected the user's token", body = ErrorDto),
        (status = 502, description = "Discord API error", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&session).require().await?;

    let selector = DashboardService::new(&state, &session).index().await?;

    Ok((StatusCode::OK, Json(selector)))
}

#[utoipa::path(
    get,
    path = "/dashboard/{id}",
    tag = DASHBOARD_TAG,
    params(
        ("id" = String, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Guild detail", body = GuildDashboardDto),
        (status = 303, description = "Not signed in, redirect to /login"),
        (status = 400, description = "Malformed guild ID", body = ErrorDto),
        (status = 404, description = "Guild not found or not accessible to the bot", body = ErrorDto),
        (status = 502, description = "Discord API error", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guild_dashboard(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&session).require().await?;

    let dashboard = DashboardService::new(&state, &session).guild(&id).await?;

    Ok((StatusCode::OK, Json(dashboard)))
}

#[utoipa::path(
    post,
    path = "/dashboard/{id}/addons",
    tag = DASHBOARD_TAG,
    params(
        ("id" = String, Path, description = "Discord guild ID")
    ),
    request_body(content = AddonForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Selections saved, redirect to the guild dashboard"),
        (status = 400, description = "Malformed guild ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn save_addons(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Form(form): Form<AddonForm>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&session).require().await?;

    AddonService::new(&state.db)
        .save_selections(&id, AddonSelections::from(form))
        .await?;

    Ok(Redirect::to(&guild_dashboard_path(&id)))
}

#[utoipa::path(
    post,
    path = "/dashboard/{id}/message",
    tag = DASHBOARD_TAG,
    params(
        ("id" = String, Path, description = "Discord guild ID")
    ),
    request_body(content = MessageForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Message sent, redirect to the guild dashboard"),
        (status = 400, description = "Malformed guild or channel ID", body = ErrorDto),
        (status = 404, description = "Channel not found or not accessible to the bot", body = ErrorDto),
        (status = 502, description = "Discord API error", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_message(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Form(form): Form<MessageForm>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&session).require().await?;

    DashboardService::new(&state, &session)
        .relay_message(&id, &form.channel_id, &form.message)
        .await?;

    Ok(Redirect::to(&guild_dashboard_path(&id)))
}

fn guild_dashboard_path(id: &str) -> String {
    format!("/dashboard/{}", id)
}
