//! Core error types.

use chrono::NaiveDate;
use thiserror::Error;

use crate::id::Id;

/// Errors produced by the store and the staffing operations on top of it.
#[derive(Debug, Error)]
pub enum Error {
    /// Storage layer error.
    #[error("storage error: {0}")]
    Storage(#[from] sled::Error),

    /// Document encoding/decoding error.
    #[error("codec error: {0}")]
    Codec(#[from] serde_json::Error),

    /// Malformed identifier.
    #[error("invalid id: {0}")]
    InvalidId(String),

    /// Engineer lookup failed.
    #[error("engineer {0} not found")]
    EngineerNotFound(Id),

    /// Project lookup failed.
    #[error("project {0} not found")]
    ProjectNotFound(Id),

    /// Assignment lookup failed.
    #[error("assignment {0} not found")]
    AssignmentNotFound(Id),

    /// Email address already registered to another engineer.
    #[error("email {0} is already registered")]
    EmailTaken(String),

    /// Allocation percentage outside the accepted range.
    #[error("allocation percentage must be between 1 and 100, got {0}")]
    AllocationOutOfRange(u32),

    /// Start date falls after end date.
    #[error("start date {start} is after end date {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    /// Engineer has none of the skills the project requires.
    #[error("engineer does not have the required skills for this project")]
    MissingSkills,

    /// The engineer already holds this role on the project.
    #[error("engineer already holds the {role} role on this project")]
    DuplicateAssignment { role: String },

    /// The candidate allocation exceeds the engineer's spare capacity.
    #[error("engineer only has {available}% capacity available during this period")]
    InsufficientCapacity { available: i64 },

    /// New maximum capacity falls below what is already committed.
    #[error("max capacity cannot drop below the {peak}% already allocated")]
    CapacityBelowAllocated { peak: i64 },

    /// Project still referenced by assignments.
    #[error("project still has {assignments} assignment(s) and cannot be deleted")]
    ProjectInUse { assignments: usize },
}
