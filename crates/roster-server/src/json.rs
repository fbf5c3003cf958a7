//! JSON response types for the REST API.
//!
//! Stored documents are wrapped in view types that add the derived fields
//! clients want to render: the engineer's title, the assignment's
//! date-derived status and weekly hours, and the joined documents on
//! assignment detail responses.

use chrono::{DateTime, NaiveDate, Utc};
use roster_core::{
    ActiveAssignment, Assignment, AssignmentDetail, AssignmentStatus, CapacityReport, Engineer,
    Project, ProjectStatus, Seniority,
};
use serde::Serialize;

/// Generic success response wrapper.
#[derive(Debug, Serialize)]
pub struct SuccessResponse<T: Serialize> {
    /// Success flag.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> SuccessResponse<T> {
    /// Create a new success response.
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// List response wrapper carrying a count alongside the data.
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    /// Success flag.
    pub success: bool,
    /// Number of items returned.
    pub count: usize,
    /// Response data.
    pub data: Vec<T>,
}

impl<T: Serialize> ListResponse<T> {
    /// Create a new list response.
    pub fn new(data: Vec<T>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Whether the store answered.
    pub storage_ok: bool,
}

/// Engineer document plus derived fields.
#[derive(Debug, Serialize)]
pub struct EngineerView {
    /// Engineer id (hex).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: String,
    /// Skill labels.
    pub skills: Vec<String>,
    /// Seniority band.
    pub seniority: Seniority,
    /// Maximum weekly capacity percentage.
    pub max_capacity: u32,
    /// Department.
    pub department: String,
    /// Derived display title.
    pub title: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<Engineer> for EngineerView {
    fn from(engineer: Engineer) -> Self {
        let title = engineer.title();
        Self {
            id: engineer.id.to_string(),
            name: engineer.name,
            email: engineer.email,
            skills: engineer.skills,
            seniority: engineer.seniority,
            max_capacity: engineer.max_capacity,
            department: engineer.department,
            title,
            created_at: engineer.created_at,
        }
    }
}

/// Project document.
#[derive(Debug, Serialize)]
pub struct ProjectView {
    /// Project id (hex).
    pub id: String,
    /// Project name.
    pub name: String,
    /// Description.
    pub description: String,
    /// First day.
    pub start_date: NaiveDate,
    /// Last day, inclusive.
    pub end_date: NaiveDate,
    /// Required skill labels.
    pub required_skills: Vec<String>,
    /// Target headcount.
    pub team_size: u32,
    /// Lifecycle state.
    pub status: ProjectStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<Project> for ProjectView {
    fn from(project: Project) -> Self {
        Self {
            id: project.id.to_string(),
            name: project.name,
            description: project.description,
            start_date: project.start_date,
            end_date: project.end_date,
            required_skills: project.required_skills,
            team_size: project.team_size,
            status: project.status,
            created_at: project.created_at,
        }
    }
}

/// Assignment document plus derived fields.
#[derive(Debug, Serialize)]
pub struct AssignmentView {
    /// Assignment id (hex).
    pub id: String,
    /// Engineer id (hex).
    pub engineer_id: String,
    /// Project id (hex).
    pub project_id: String,
    /// Allocation percentage.
    pub allocation_percentage: u32,
    /// First day.
    pub start_date: NaiveDate,
    /// Last day, inclusive.
    pub end_date: NaiveDate,
    /// Role on the project.
    pub role: String,
    /// Status derived against today's date.
    pub status: AssignmentStatus,
    /// Derived weekly hours on a 40-hour week.
    pub hours_per_week: u32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<Assignment> for AssignmentView {
    fn from(assignment: Assignment) -> Self {
        let status = assignment.status_on(Utc::now().date_naive());
        let hours_per_week = assignment.hours_per_week();
        Self {
            id: assignment.id.to_string(),
            engineer_id: assignment.engineer_id.to_string(),
            project_id: assignment.project_id.to_string(),
            allocation_percentage: assignment.allocation_percentage,
            start_date: assignment.start_date,
            end_date: assignment.end_date,
            role: assignment.role,
            status,
            hours_per_week,
            created_at: assignment.created_at,
        }
    }
}

/// Assignment joined with the engineer and project it references.
#[derive(Debug, Serialize)]
pub struct AssignmentDetailView {
    /// Assignment fields.
    #[serde(flatten)]
    pub assignment: AssignmentView,
    /// The committed engineer.
    pub engineer: EngineerView,
    /// The receiving project.
    pub project: ProjectView,
}

impl From<AssignmentDetail> for AssignmentDetailView {
    fn from(detail: AssignmentDetail) -> Self {
        Self {
            assignment: detail.assignment.into(),
            engineer: detail.engineer.into(),
            project: detail.project.into(),
        }
    }
}

/// Capacity report response data.
#[derive(Debug, Serialize)]
pub struct CapacityReportJson {
    /// The engineer being reported on.
    pub engineer: CapacityEngineerJson,
    /// The report date.
    pub on: NaiveDate,
    /// Assignments active on the report date.
    pub active_assignments: Vec<ActiveAssignmentJson>,
    /// Sum of active allocation percentages.
    pub total_allocated: i64,
    /// Spare capacity. Negative when overcommitted.
    pub available_capacity: i64,
}

/// Engineer summary inside a capacity report.
#[derive(Debug, Serialize)]
pub struct CapacityEngineerJson {
    /// Engineer id (hex).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Maximum weekly capacity percentage.
    pub max_capacity: u32,
}

/// One active assignment inside a capacity report.
#[derive(Debug, Serialize)]
pub struct ActiveAssignmentJson {
    /// Assignment fields.
    #[serde(flatten)]
    pub assignment: AssignmentView,
    /// Name of the receiving project.
    pub project_name: String,
}

impl From<CapacityReport> for CapacityReportJson {
    fn from(report: CapacityReport) -> Self {
        Self {
            engineer: CapacityEngineerJson {
                id: report.engineer.id.to_string(),
                name: report.engineer.name,
                max_capacity: report.engineer.max_capacity,
            },
            on: report.on,
            active_assignments: report.active.into_iter().map(Into::into).collect(),
            total_allocated: report.total_allocated,
            available_capacity: report.available_capacity,
        }
    }
}

impl From<ActiveAssignment> for ActiveAssignmentJson {
    fn from(active: ActiveAssignment) -> Self {
        Self {
            assignment: active.assignment.into(),
            project_name: active.project_name,
        }
    }
}
