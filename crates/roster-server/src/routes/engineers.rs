//! Engineer endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use roster_core::{EngineerUpdate, NewEngineer};
use serde::Deserialize;

use super::parse_id;
use crate::error::AppError;
use crate::json::{CapacityReportJson, EngineerView, ListResponse, SuccessResponse};
use crate::AppState;

/// Engineer routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/engineers", get(handle_list).post(handle_create))
        .route("/api/engineers/:id", get(handle_get).put(handle_update))
        .route("/api/engineers/:id/capacity", get(handle_capacity))
        .route("/api/engineers/skills/:skills", get(handle_by_skills))
}

/// List all engineers.
async fn handle_list(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<EngineerView>>, AppError> {
    let engineers = state.staffing.list_engineers()?;
    Ok(Json(ListResponse::new(
        engineers.into_iter().map(Into::into).collect(),
    )))
}

/// Create an engineer.
async fn handle_create(
    State(state): State<AppState>,
    Json(new): Json<NewEngineer>,
) -> Result<(StatusCode, Json<SuccessResponse<EngineerView>>), AppError> {
    let engineer = state.staffing.create_engineer(new)?;
    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse::new(engineer.into())),
    ))
}

/// Get an engineer by id.
async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse<EngineerView>>, AppError> {
    let engineer = state.staffing.get_engineer(parse_id(&id)?)?;
    Ok(Json(SuccessResponse::new(engineer.into())))
}

/// Apply a partial update to an engineer.
async fn handle_update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<EngineerUpdate>,
) -> Result<Json<SuccessResponse<EngineerView>>, AppError> {
    let engineer = state.staffing.update_engineer(parse_id(&id)?, update)?;
    Ok(Json(SuccessResponse::new(engineer.into())))
}

/// Query parameters for a capacity report.
#[derive(Debug, Deserialize)]
struct CapacityParams {
    /// Report date (YYYY-MM-DD). Defaults to today.
    on: Option<NaiveDate>,
}

/// Utilization summary for an engineer on a given date.
async fn handle_capacity(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<CapacityParams>,
) -> Result<Json<SuccessResponse<CapacityReportJson>>, AppError> {
    let on = params.on.unwrap_or_else(|| Utc::now().date_naive());
    let report = state.staffing.capacity_report(parse_id(&id)?, on)?;
    Ok(Json(SuccessResponse::new(report.into())))
}

/// Engineers holding at least one of the comma-separated skills.
async fn handle_by_skills(
    State(state): State<AppState>,
    Path(skills): Path<String>,
) -> Result<Json<ListResponse<EngineerView>>, AppError> {
    let wanted: Vec<String> = skills
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    let engineers = state.staffing.engineers_with_any_skill(&wanted)?;
    Ok(Json(ListResponse::new(
        engineers.into_iter().map(Into::into).collect(),
    )))
}
