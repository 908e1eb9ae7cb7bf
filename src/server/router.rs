use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, dashboard},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Guild Dashboard"),
    tags(
        (name = "auth", description = "Discord sign-in and sign-out"),
        (name = "dashboard", description = "Guild overview, addon settings and message relay")
    )
)]
struct ApiDoc;

/// Builds every route of the application, plus Swagger UI at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = documented_routes().split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

fn documented_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::home))
        .routes(routes!(auth::login))
        .routes(routes!(auth::callback))
        .routes(routes!(auth::logout))
        .routes(routes!(dashboard::get_dashboard))
        .routes(routes!(dashboard::get_guild_dashboard))
        .routes(routes!(dashboard::save_addons))
        .routes(routes!(dashboard::send_message))
}
