use axum::{Extension, Router, routing::get};
use sqlx::PgPool;
use std::future::ready;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_scalar::{Scalar, Servable as ScalarServable};

pub mod config;
pub mod error;
pub mod handlers;
pub mod validation;

#[derive(Clone, Debug)]
pub struct State {
    pub pg_pool: PgPool,
}

#[derive(OpenApi)]
#[openapi(info(
    title = "Palette Picker API",
    description = "Projects and their five-color palettes"
))]
struct ApiDoc;

/// Assembles the full application router around a connection pool.
///
/// The POST palette route shares the `/projects/palettes/:id` template with
/// the single-palette routes; its captured segment is the project id.
pub fn app(pool: PgPool) -> Router {
    let state = State { pg_pool: pool };

    let (api_router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            handlers::projects::get_projects,
            handlers::projects::create_project
        ))
        .routes(routes!(
            handlers::projects::get_project_by_id,
            handlers::projects::update_project,
            handlers::projects::delete_project
        ))
        .routes(routes!(handlers::palettes::get_palettes))
        .routes(routes!(
            handlers::palettes::get_palette_by_id,
            handlers::palettes::create_palette,
            handlers::palettes::update_palette,
            handlers::palettes::delete_palette
        ))
        .split_for_parts();

    let json_specification = api.to_pretty_json().expect("API docs generation failed");

    Router::new()
        .nest("/api", api_router)
        .route("/health", get(handlers::health::check))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
        .route(
            "/api-docs/openapi.json",
            get(move || ready(json_specification.clone())),
        )
        .merge(Scalar::with_url("/api-docs", api))
}
