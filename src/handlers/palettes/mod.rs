use crate::State;
use crate::error::ApiError;
use crate::validation;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde_json::{Value, json};

pub mod types;

use types::Palette;

const PALETTES_TAG: &str = "palettes";

const PALETTE_COLUMNS: &str = "id, project_id, name, color1, color2, color3, color4, color5";

#[utoipa::path(
    get,
    path = "/palettes",
    responses(
        (status = 200, description = "All palettes across all projects, in insertion order", body = Vec<Palette>),
        (status = 500, description = "Failed to retrieve palettes"),
    ),
    tag = PALETTES_TAG
)]
pub async fn get_palettes(
    Extension(state): Extension<State>,
) -> Result<Json<Vec<Palette>>, ApiError> {
    let palettes = sqlx::query_as::<_, Palette>(&format!(
        "SELECT {PALETTE_COLUMNS} FROM palettes ORDER BY id"
    ))
    .fetch_all(&state.pg_pool)
    .await?;

    Ok(Json(palettes))
}

#[utoipa::path(
    get,
    path = "/projects/palettes/{id}",
    responses(
        (status = 200, description = "Return found palette", body = Palette),
        (status = 404, description = "No palette with the given id"),
    ),
    tag = PALETTES_TAG
)]
pub async fn get_palette_by_id(
    Path(id): Path<i32>,
    Extension(state): Extension<State>,
) -> Result<Json<Palette>, ApiError> {
    let palette = sqlx::query_as::<_, Palette>(&format!(
        "SELECT {PALETTE_COLUMNS} FROM palettes WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(&state.pg_pool)
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("No Palette with ID of {id} found")))?;

    Ok(Json(palette))
}

// Success is 200 rather than 201; the original service answered this way and
// clients depend on it.
#[utoipa::path(
    post,
    path = "/projects/palettes/{id}",
    responses(
        (status = 200, description = "Palette created for the project, returns the new id"),
        (status = 422, description = "Request body is missing a required field"),
    ),
    tag = PALETTES_TAG
)]
pub async fn create_palette(
    Path(project_id): Path<i32>,
    Extension(state): Extension<State>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    validation::PALETTE.check(&body)?;

    let id = sqlx::query_scalar::<_, i32>(
        "INSERT INTO palettes (project_id, name, color1, color2, color3, color4, color5)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id",
    )
    .bind(project_id)
    .bind(validation::required_str(&body, "name"))
    .bind(validation::required_str(&body, "color1"))
    .bind(validation::required_str(&body, "color2"))
    .bind(validation::required_str(&body, "color3"))
    .bind(validation::required_str(&body, "color4"))
    .bind(validation::required_str(&body, "color5"))
    .fetch_one(&state.pg_pool)
    .await?;

    Ok(Json(json!({ "id": id })))
}

#[utoipa::path(
    patch,
    path = "/projects/palettes/{id}",
    responses(
        (status = 200, description = "Palette updated, returns the id"),
        (status = 422, description = "Request body is missing a required field"),
    ),
    tag = PALETTES_TAG
)]
pub async fn update_palette(
    Path(id): Path<i32>,
    Extension(state): Extension<State>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    validation::PALETTE.check(&body)?;

    sqlx::query(
        "UPDATE palettes
        SET name = $2, color1 = $3, color2 = $4, color3 = $5, color4 = $6, color5 = $7
        WHERE id = $1",
    )
    .bind(id)
    .bind(validation::required_str(&body, "name"))
    .bind(validation::required_str(&body, "color1"))
    .bind(validation::required_str(&body, "color2"))
    .bind(validation::required_str(&body, "color3"))
    .bind(validation::required_str(&body, "color4"))
    .bind(validation::required_str(&body, "color5"))
    .execute(&state.pg_pool)
    .await?;

    Ok(Json(json!({ "id": id })))
}

#[utoipa::path(
    delete,
    path = "/projects/palettes/{id}",
    responses(
        (status = 200, description = "Palette deleted"),
        (status = 404, description = "No palette with the given id"),
    ),
    tag = PALETTES_TAG
)]
pub async fn delete_palette(
    Path(id): Path<i32>,
    Extension(state): Extension<State>,
) -> Result<StatusCode, ApiError> {
    let existing = sqlx::query_scalar::<_, i32>("SELECT id FROM palettes WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.pg_pool)
        .await?;

    if existing.is_none() {
        // Legacy body: a bare string, lowercase "palettes" unlike the
        // project delete message.
        return Err(ApiError::NotFoundBare(format!(
            "No palettes with an ID of {id} found"
        )));
    }

    sqlx::query("DELETE FROM palettes WHERE id = $1")
        .bind(id)
        .execute(&state.pg_pool)
        .await?;

    Ok(StatusCode::OK)
}
