//! Project documents.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::id::Id;
use crate::model::Engineer;

/// Manager-maintained lifecycle states for projects.
///
/// Unlike assignment status this is stored, not derived: a project can sit
/// in planning long after its nominal start date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Planning,
    Active,
    Completed,
}

/// A project engineers get assigned to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier.
    pub id: Id,

    /// Project name.
    pub name: String,

    /// Free-form description.
    pub description: String,

    /// First day of the project.
    pub start_date: NaiveDate,

    /// Last day of the project, inclusive.
    pub end_date: NaiveDate,

    /// Skill labels a candidate engineer must match at least one of.
    #[serde(default)]
    pub required_skills: Vec<String>,

    /// Target headcount.
    pub team_size: u32,

    /// Lifecycle state.
    #[serde(default)]
    pub status: ProjectStatus,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Create a project with a fresh id and defaulted fields.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        team_size: u32,
    ) -> Self {
        Self {
            id: Id::generate(),
            name: name.into(),
            description: description.into(),
            start_date,
            end_date,
            required_skills: Vec::new(),
            team_size,
            status: ProjectStatus::default(),
            created_at: Utc::now(),
        }
    }

    /// Set the required skill labels.
    pub fn with_required_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_skills = skills.into_iter().map(Into::into).collect();
        self
    }

    /// Set the lifecycle state.
    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }

    /// Whether the engineer qualifies for this project.
    ///
    /// A project with no required skills accepts anyone; otherwise the
    /// engineer must hold at least one of the required labels.
    pub fn skill_match(&self, engineer: &Engineer) -> bool {
        self.required_skills.is_empty() || engineer.has_any_skill(&self.required_skills)
    }
}
