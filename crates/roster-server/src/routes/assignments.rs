//! Assignment endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use roster_core::{AssignmentFilter, AssignmentUpdate, NewAssignment};
use serde::Deserialize;

use super::parse_id;
use crate::error::AppError;
use crate::json::{AssignmentDetailView, ListResponse, SuccessResponse};
use crate::AppState;

/// Assignment routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/assignments", get(handle_list).post(handle_create))
        .route(
            "/api/assignments/:id",
            get(handle_get).put(handle_update).delete(handle_delete),
        )
        .route(
            "/api/assignments/engineer/:id",
            get(handle_list_for_engineer),
        )
}

/// Query parameters for assignment listings.
#[derive(Debug, Deserialize)]
struct ListParams {
    /// Narrow to one engineer.
    engineer_id: Option<String>,
    /// Narrow to one project.
    project_id: Option<String>,
}

impl ListParams {
    fn into_filter(self) -> Result<AssignmentFilter, AppError> {
        Ok(AssignmentFilter {
            engineer_id: self.engineer_id.as_deref().map(parse_id).transpose()?,
            project_id: self.project_id.as_deref().map(parse_id).transpose()?,
        })
    }
}

/// List assignments, optionally narrowed by engineer or project.
async fn handle_list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResponse<AssignmentDetailView>>, AppError> {
    let details = state.staffing.list_assignments(params.into_filter()?)?;
    Ok(Json(ListResponse::new(
        details.into_iter().map(Into::into).collect(),
    )))
}

/// Create an assignment.
async fn handle_create(
    State(state): State<AppState>,
    Json(new): Json<NewAssignment>,
) -> Result<(StatusCode, Json<SuccessResponse<AssignmentDetailView>>), AppError> {
    let detail = state.staffing.create_assignment(new)?;
    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse::new(detail.into())),
    ))
}

/// Get an assignment joined with its engineer and project.
async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse<AssignmentDetailView>>, AppError> {
    let detail = state.staffing.get_assignment(parse_id(&id)?)?;
    Ok(Json(SuccessResponse::new(detail.into())))
}

/// Apply a partial update to an assignment.
async fn handle_update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<AssignmentUpdate>,
) -> Result<Json<SuccessResponse<AssignmentDetailView>>, AppError> {
    let detail = state.staffing.update_assignment(parse_id(&id)?, update)?;
    Ok(Json(SuccessResponse::new(detail.into())))
}

/// Delete an assignment.
async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse<serde_json::Value>>, AppError> {
    state.staffing.delete_assignment(parse_id(&id)?)?;
    Ok(Json(SuccessResponse::new(serde_json::json!({}))))
}

/// All assignments committing one engineer.
async fn handle_list_for_engineer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ListResponse<AssignmentDetailView>>, AppError> {
    let filter = AssignmentFilter {
        engineer_id: Some(parse_id(&id)?),
        ..Default::default()
    };
    let details = state.staffing.list_assignments(filter)?;
    Ok(Json(ListResponse::new(
        details.into_iter().map(Into::into).collect(),
    )))
}
