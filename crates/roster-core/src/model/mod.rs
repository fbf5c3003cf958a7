//! Staffing domain documents.
//!
//! This module defines the three document kinds held in the store: engineers,
//! projects, and the assignments that tie one to the other for a date range.

mod assignment;
mod engineer;
mod project;

pub use assignment::{Assignment, AssignmentStatus, WORK_WEEK_HOURS};
pub use engineer::{Engineer, Seniority, DEFAULT_MAX_CAPACITY};
pub use project::{Project, ProjectStatus};
