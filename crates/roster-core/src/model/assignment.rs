//! Assignment documents.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::capacity;
use crate::id::Id;

/// Hours in the working week, used to derive [`Assignment::hours_per_week`].
pub const WORK_WEEK_HOURS: u32 = 40;

/// Date-derived lifecycle states for assignments.
///
/// Never stored: always computed against a reference date so it cannot go
/// stale as the calendar moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStatus {
    Planned,
    Active,
    Completed,
}

/// A time-boxed commitment of an engineer to a project.
///
/// Both dates are inclusive: an assignment ending 2025-06-30 still consumes
/// capacity on that day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Unique identifier.
    pub id: Id,

    /// The committed engineer.
    pub engineer_id: Id,

    /// The receiving project.
    pub project_id: Id,

    /// Share of the engineer's week, as an integer percentage in 1..=100.
    pub allocation_percentage: u32,

    /// First day of the commitment.
    pub start_date: NaiveDate,

    /// Last day of the commitment, inclusive.
    pub end_date: NaiveDate,

    /// Role on the project, e.g. "Tech Lead".
    pub role: String,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Assignment {
    /// Create an assignment with a fresh id.
    pub fn new(
        engineer_id: Id,
        project_id: Id,
        allocation_percentage: u32,
        start_date: NaiveDate,
        end_date: NaiveDate,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: Id::generate(),
            engineer_id,
            project_id,
            allocation_percentage,
            start_date,
            end_date,
            role: role.into(),
            created_at: Utc::now(),
        }
    }

    /// Lifecycle state relative to the given date.
    pub fn status_on(&self, date: NaiveDate) -> AssignmentStatus {
        if date < self.start_date {
            AssignmentStatus::Planned
        } else if date > self.end_date {
            AssignmentStatus::Completed
        } else {
            AssignmentStatus::Active
        }
    }

    /// Whole hours per week this allocation represents, on a 40-hour week.
    pub fn hours_per_week(&self) -> u32 {
        (self.allocation_percentage * WORK_WEEK_HOURS + 50) / 100
    }

    /// Whether this assignment shares at least one day with the window.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        capacity::overlaps(self.start_date, self.end_date, start, end)
    }
}
