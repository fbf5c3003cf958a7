//! Engineer documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::Id;

/// Default weekly capacity: a full-time engineer.
pub const DEFAULT_MAX_CAPACITY: u32 = 100;

/// Seniority bands for engineers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seniority {
    Junior,
    #[default]
    Mid,
    Senior,
}

impl Seniority {
    /// Capitalized label used in derived titles.
    pub fn label(&self) -> &'static str {
        match self {
            Seniority::Junior => "Junior",
            Seniority::Mid => "Mid",
            Seniority::Senior => "Senior",
        }
    }
}

/// A staffable engineer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Engineer {
    /// Unique identifier.
    pub id: Id,

    /// Display name.
    pub name: String,

    /// Contact address, unique across the store.
    pub email: String,

    /// Skill labels, matched verbatim against project requirements.
    #[serde(default)]
    pub skills: Vec<String>,

    /// Seniority band.
    #[serde(default)]
    pub seniority: Seniority,

    /// Maximum weekly capacity as a percentage of full-time. 100 is a
    /// full-time engineer, 50 a part-timer.
    pub max_capacity: u32,

    /// Department the engineer belongs to.
    pub department: String,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Engineer {
    /// Create an engineer with a fresh id and defaulted fields.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Id::generate(),
            name: name.into(),
            email: email.into(),
            skills: Vec::new(),
            seniority: Seniority::default(),
            max_capacity: DEFAULT_MAX_CAPACITY,
            department: "Engineering".to_string(),
            created_at: Utc::now(),
        }
    }

    /// Set the skill labels.
    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    /// Set the seniority band.
    pub fn with_seniority(mut self, seniority: Seniority) -> Self {
        self.seniority = seniority;
        self
    }

    /// Set the maximum weekly capacity.
    pub fn with_max_capacity(mut self, max_capacity: u32) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    /// Set the department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Derived display title, e.g. "Senior Frontend Engineer".
    pub fn title(&self) -> String {
        format!("{} {} Engineer", self.seniority.label(), self.department)
    }

    /// Whether the engineer has at least one of the given skills.
    ///
    /// Matching is exact: labels are compared verbatim, case included.
    pub fn has_any_skill(&self, wanted: &[String]) -> bool {
        wanted.iter().any(|skill| self.skills.contains(skill))
    }
}
