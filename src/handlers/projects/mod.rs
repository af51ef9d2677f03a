use crate::State;
use crate::error::ApiError;
use crate::validation;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde_json::{Value, json};

pub mod types;

use types::Project;

const PROJECTS_TAG: &str = "projects";

#[utoipa::path(
    get,
    path = "/projects",
    responses(
        (status = 200, description = "All projects in insertion order", body = Vec<Project>),
        (status = 500, description = "Failed to retrieve projects"),
    ),
    tag = PROJECTS_TAG
)]
pub async fn get_projects(
    Extension(state): Extension<State>,
) -> Result<Json<Vec<Project>>, ApiError> {
    let projects = sqlx::query_as::<_, Project>("SELECT id, name FROM projects ORDER BY id")
        .fetch_all(&state.pg_pool)
        .await?;

    Ok(Json(projects))
}

#[utoipa::path(
    get,
    path = "/projects/{id}",
    responses(
        (status = 200, description = "Return found project", body = Project),
        (status = 404, description = "No project with the given id"),
    ),
    tag = PROJECTS_TAG
)]
pub async fn get_project_by_id(
    Path(id): Path<i32>,
    Extension(state): Extension<State>,
) -> Result<Json<Project>, ApiError> {
    let project = sqlx::query_as::<_, Project>("SELECT id, name FROM projects WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.pg_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("No Project with ID of {id} found")))?;

    Ok(Json(project))
}

#[utoipa::path(
    post,
    path = "/projects",
    responses(
        (status = 201, description = "Project created successfully", body = Project),
        (status = 422, description = "Request body is missing the name field"),
    ),
    tag = PROJECTS_TAG
)]
pub async fn create_project(
    Extension(state): Extension<State>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Project>), ApiError> {
    validation::PROJECT.check(&body)?;

    let project =
        sqlx::query_as::<_, Project>("INSERT INTO projects (name) VALUES ($1) RETURNING id, name")
            .bind(validation::required_str(&body, "name"))
            .fetch_one(&state.pg_pool)
            .await?;

    Ok((StatusCode::CREATED, Json(project)))
}

#[utoipa::path(
    patch,
    path = "/projects/{id}",
    responses(
        (status = 200, description = "Project renamed, returns the id"),
        (status = 422, description = "Request body is missing the name field"),
    ),
    tag = PROJECTS_TAG
)]
pub async fn update_project(
    Path(id): Path<i32>,
    Extension(state): Extension<State>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    validation::PROJECT.check(&body)?;

    sqlx::query("UPDATE projects SET name = $2 WHERE id = $1")
        .bind(id)
        .bind(validation::required_str(&body, "name"))
        .execute(&state.pg_pool)
        .await?;

    Ok(Json(json!({ "id": id })))
}

#[utoipa::path(
    delete,
    path = "/projects/{id}",
    responses(
        (status = 200, description = "Project and its palettes deleted"),
        (status = 404, description = "No project with the given id"),
    ),
    tag = PROJECTS_TAG
)]
pub async fn delete_project(
    Path(id): Path<i32>,
    Extension(state): Extension<State>,
) -> Result<StatusCode, ApiError> {
    let existing = sqlx::query_scalar::<_, i32>("SELECT id FROM projects WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.pg_pool)
        .await?;

    if existing.is_none() {
        // Legacy body: a bare string, with this exact capitalization.
        return Err(ApiError::NotFoundBare(format!(
            "No Projects with an ID of {id} Found"
        )));
    }

    // ON DELETE CASCADE removes the project's palettes.
    sqlx::query("DELETE FROM projects WHERE id = $1")
        .bind(id)
        .execute(&state.pg_pool)
        .await?;

    Ok(StatusCode::OK)
}
