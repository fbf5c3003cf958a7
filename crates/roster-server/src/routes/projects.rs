//! Project endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use roster_core::{NewProject, ProjectUpdate};

use super::parse_id;
use crate::error::AppError;
use crate::json::{ListResponse, ProjectView, SuccessResponse};
use crate::AppState;

/// Project routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/projects", get(handle_list).post(handle_create))
        .route(
            "/api/projects/:id",
            get(handle_get).put(handle_update).delete(handle_delete),
        )
}

/// List all projects.
async fn handle_list(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<ProjectView>>, AppError> {
    let projects = state.staffing.list_projects()?;
    Ok(Json(ListResponse::new(
        projects.into_iter().map(Into::into).collect(),
    )))
}

/// Create a project.
async fn handle_create(
    State(state): State<AppState>,
    Json(new): Json<NewProject>,
) -> Result<(StatusCode, Json<SuccessResponse<ProjectView>>), AppError> {
    let project = state.staffing.create_project(new)?;
    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse::new(project.into())),
    ))
}

/// Get a project by id.
async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse<ProjectView>>, AppError> {
    let project = state.staffing.get_project(parse_id(&id)?)?;
    Ok(Json(SuccessResponse::new(project.into())))
}

/// Apply a partial update to a project.
async fn handle_update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<ProjectUpdate>,
) -> Result<Json<SuccessResponse<ProjectView>>, AppError> {
    let project = state.staffing.update_project(parse_id(&id)?, update)?;
    Ok(Json(SuccessResponse::new(project.into())))
}

/// Delete a project with no assignments attached.
async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse<serde_json::Value>>, AppError> {
    state.staffing.delete_project(parse_id(&id)?)?;
    Ok(Json(SuccessResponse::new(serde_json::json!({}))))
}
