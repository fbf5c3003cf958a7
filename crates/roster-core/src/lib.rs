//! Roster core - staffing model, capacity engine, and document store.
//!
//! This crate provides everything below the HTTP surface: the engineer,
//! project, and assignment documents, the pure capacity arithmetic that
//! decides whether an allocation fits, the sled-backed store they live in,
//! and the [`Staffing`] service that ties the three together and enforces
//! the staffing invariants.

pub mod capacity;
pub mod error;
pub mod id;
pub mod model;
pub mod service;
pub mod store;

pub use capacity::{allocated_during, allocated_on, can_allocate, peak_allocation, CapacityCheck};
pub use error::Error;
pub use id::Id;
pub use model::{
    Assignment, AssignmentStatus, Engineer, Project, ProjectStatus, Seniority,
    DEFAULT_MAX_CAPACITY, WORK_WEEK_HOURS,
};
pub use service::{
    ActiveAssignment, AssignmentDetail, AssignmentFilter, AssignmentUpdate, CapacityReport,
    EngineerUpdate, NewAssignment, NewEngineer, NewProject, ProjectUpdate, Staffing,
};
pub use store::{StaffingStore, StoreConfig};
