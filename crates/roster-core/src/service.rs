//! Staffing operations and invariant enforcement.
//!
//! [`Staffing`] wraps the store with the rules the raw trees cannot express:
//! referential checks, skill matching, one role per engineer per project,
//! and the capacity check that keeps engineers from being committed past
//! their maximum. Every mutation funnels through here.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::capacity;
use crate::error::Error;
use crate::id::Id;
use crate::model::{
    Assignment, Engineer, Project, ProjectStatus, Seniority, DEFAULT_MAX_CAPACITY,
};
use crate::store::{StaffingStore, StoreConfig};

/// Payload for creating an engineer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEngineer {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub seniority: Seniority,
    #[serde(default = "default_max_capacity")]
    pub max_capacity: u32,
    #[serde(default = "default_department")]
    pub department: String,
}

fn default_max_capacity() -> u32 {
    DEFAULT_MAX_CAPACITY
}

fn default_department() -> String {
    "Engineering".to_string()
}

/// Partial update for an engineer. Absent fields keep their current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineerUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub skills: Option<Vec<String>>,
    pub seniority: Option<Seniority>,
    pub max_capacity: Option<u32>,
    pub department: Option<String>,
}

/// Payload for creating a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub required_skills: Vec<String>,
    pub team_size: u32,
    #[serde(default)]
    pub status: ProjectStatus,
}

/// Partial update for a project. Absent fields keep their current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub required_skills: Option<Vec<String>>,
    pub team_size: Option<u32>,
    pub status: Option<ProjectStatus>,
}

/// Payload for creating an assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAssignment {
    pub engineer_id: Id,
    pub project_id: Id,
    pub allocation_percentage: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub role: String,
}

/// Partial update for an assignment. The engineer and project are fixed at
/// creation; move work by deleting and recreating the assignment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssignmentUpdate {
    pub allocation_percentage: Option<u32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub role: Option<String>,
}

/// Filter for assignment listings.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssignmentFilter {
    pub engineer_id: Option<Id>,
    pub project_id: Option<Id>,
}

/// An assignment joined with the documents it references.
#[derive(Debug, Clone)]
pub struct AssignmentDetail {
    pub assignment: Assignment,
    pub engineer: Engineer,
    pub project: Project,
}

/// One line of a capacity report: an assignment active on the report date.
#[derive(Debug, Clone)]
pub struct ActiveAssignment {
    pub assignment: Assignment,
    pub project_name: String,
}

/// Point-in-time utilization summary for an engineer.
#[derive(Debug, Clone)]
pub struct CapacityReport {
    pub engineer: Engineer,
    pub on: NaiveDate,
    pub active: Vec<ActiveAssignment>,
    pub total_allocated: i64,
    /// May be negative when concurrent writers overcommitted the engineer.
    pub available_capacity: i64,
}

/// The staffing service.
pub struct Staffing {
    store: StaffingStore,
}

impl Staffing {
    /// Wrap an already open store.
    pub fn new(store: StaffingStore) -> Self {
        Self { store }
    }

    /// Open the store at the configured path and wrap it.
    pub fn open(config: StoreConfig) -> Result<Self, Error> {
        Ok(Self::new(StaffingStore::open(config)?))
    }

    /// Access the underlying store.
    pub fn store(&self) -> &StaffingStore {
        &self.store
    }

    // ========== Engineers ==========

    /// Create an engineer. The store refuses duplicate email addresses.
    pub fn create_engineer(&self, new: NewEngineer) -> Result<Engineer, Error> {
        let engineer = Engineer {
            id: Id::generate(),
            name: new.name,
            email: new.email,
            skills: new.skills,
            seniority: new.seniority,
            max_capacity: new.max_capacity,
            department: new.department,
            created_at: Utc::now(),
        };
        self.store.put_engineer(&engineer)?;
        info!(engineer = %engineer.id, email = %engineer.email, "engineer created");
        Ok(engineer)
    }

    /// Get an engineer by id.
    pub fn get_engineer(&self, id: Id) -> Result<Engineer, Error> {
        self.store
            .get_engineer(id)?
            .ok_or(Error::EngineerNotFound(id))
    }

    /// List all engineers.
    pub fn list_engineers(&self) -> Result<Vec<Engineer>, Error> {
        self.store.list_engineers()
    }

    /// Engineers holding at least one of the given skills.
    pub fn engineers_with_any_skill(&self, skills: &[String]) -> Result<Vec<Engineer>, Error> {
        let mut engineers = self.store.list_engineers()?;
        engineers.retain(|e| e.has_any_skill(skills));
        Ok(engineers)
    }

    /// Apply a partial update to an engineer.
    ///
    /// Lowering `max_capacity` below the engineer's peak committed
    /// allocation is refused, otherwise existing assignments would silently
    /// break the capacity invariant.
    pub fn update_engineer(&self, id: Id, update: EngineerUpdate) -> Result<Engineer, Error> {
        let mut engineer = self.get_engineer(id)?;

        if let Some(name) = update.name {
            engineer.name = name;
        }
        if let Some(email) = update.email {
            engineer.email = email;
        }
        if let Some(skills) = update.skills {
            engineer.skills = skills;
        }
        if let Some(seniority) = update.seniority {
            engineer.seniority = seniority;
        }
        if let Some(department) = update.department {
            engineer.department = department;
        }
        if let Some(max_capacity) = update.max_capacity {
            let assignments = self.store.assignments_for_engineer(id)?;
            let peak = capacity::peak_allocation(&assignments);
            if i64::from(max_capacity) < peak {
                return Err(Error::CapacityBelowAllocated { peak });
            }
            engineer.max_capacity = max_capacity;
        }

        self.store.put_engineer(&engineer)?;
        info!(engineer = %id, "engineer updated");
        Ok(engineer)
    }

    /// Utilization summary for an engineer on the given date.
    pub fn capacity_report(&self, engineer_id: Id, on: NaiveDate) -> Result<CapacityReport, Error> {
        let engineer = self.get_engineer(engineer_id)?;
        let assignments = self.store.assignments_for_engineer(engineer_id)?;

        let total_allocated = capacity::allocated_on(&assignments, on);
        let available_capacity = i64::from(engineer.max_capacity) - total_allocated;

        let mut active = Vec::new();
        for assignment in assignments {
            if assignment.overlaps(on, on) {
                let project_name = self
                    .store
                    .get_project(assignment.project_id)?
                    .map(|p| p.name)
                    .unwrap_or_default();
                active.push(ActiveAssignment {
                    assignment,
                    project_name,
                });
            }
        }

        Ok(CapacityReport {
            engineer,
            on,
            active,
            total_allocated,
            available_capacity,
        })
    }

    // ========== Projects ==========

    /// Create a project.
    pub fn create_project(&self, new: NewProject) -> Result<Project, Error> {
        validate_dates(new.start_date, new.end_date)?;

        let project = Project {
            id: Id::generate(),
            name: new.name,
            description: new.description,
            start_date: new.start_date,
            end_date: new.end_date,
            required_skills: new.required_skills,
            team_size: new.team_size,
            status: new.status,
            created_at: Utc::now(),
        };
        self.store.put_project(&project)?;
        info!(project = %project.id, name = %project.name, "project created");
        Ok(project)
    }

    /// Get a project by id.
    pub fn get_project(&self, id: Id) -> Result<Project, Error> {
        self.store.get_project(id)?.ok_or(Error::ProjectNotFound(id))
    }

    /// List all projects.
    pub fn list_projects(&self) -> Result<Vec<Project>, Error> {
        self.store.list_projects()
    }

    /// Apply a partial update to a project.
    pub fn update_project(&self, id: Id, update: ProjectUpdate) -> Result<Project, Error> {
        let mut project = self.get_project(id)?;

        if let Some(name) = update.name {
            project.name = name;
        }
        if let Some(description) = update.description {
            project.description = description;
        }
        if let Some(start_date) = update.start_date {
            project.start_date = start_date;
        }
        if let Some(end_date) = update.end_date {
            project.end_date = end_date;
        }
        validate_dates(project.start_date, project.end_date)?;
        if let Some(required_skills) = update.required_skills {
            project.required_skills = required_skills;
        }
        if let Some(team_size) = update.team_size {
            project.team_size = team_size;
        }
        if let Some(status) = update.status {
            project.status = status;
        }

        self.store.put_project(&project)?;
        info!(project = %id, "project updated");
        Ok(project)
    }

    /// Delete a project with no assignments attached.
    pub fn delete_project(&self, id: Id) -> Result<(), Error> {
        if self.store.get_project(id)?.is_none() {
            return Err(Error::ProjectNotFound(id));
        }
        let assignments = self.store.assignments_for_project(id)?.len();
        if assignments > 0 {
            return Err(Error::ProjectInUse { assignments });
        }
        self.store.remove_project(id)?;
        info!(project = %id, "project deleted");
        Ok(())
    }

    // ========== Assignments ==========

    /// Create an assignment after running the full validation pipeline:
    /// both referenced documents must exist, the engineer must match the
    /// project's skills, must not already hold the role on the project, and
    /// must have enough spare capacity across the whole window.
    pub fn create_assignment(&self, new: NewAssignment) -> Result<AssignmentDetail, Error> {
        validate_allocation(new.allocation_percentage)?;
        validate_dates(new.start_date, new.end_date)?;

        let engineer = self.get_engineer(new.engineer_id)?;
        let project = self.get_project(new.project_id)?;

        if !project.skill_match(&engineer) {
            return Err(Error::MissingSkills);
        }

        let existing = self.store.assignments_for_engineer(new.engineer_id)?;
        if existing
            .iter()
            .any(|a| a.project_id == new.project_id && a.role == new.role)
        {
            return Err(Error::DuplicateAssignment { role: new.role });
        }

        let check = capacity::can_allocate(
            engineer.max_capacity,
            &existing,
            new.start_date,
            new.end_date,
            new.allocation_percentage,
            None,
        );
        if !check.allowed {
            return Err(Error::InsufficientCapacity {
                available: check.available_capacity,
            });
        }

        let assignment = Assignment::new(
            new.engineer_id,
            new.project_id,
            new.allocation_percentage,
            new.start_date,
            new.end_date,
            new.role,
        );
        self.store.put_assignment(&assignment)?;
        info!(
            assignment = %assignment.id,
            engineer = %engineer.id,
            project = %project.id,
            allocation = assignment.allocation_percentage,
            "assignment created"
        );

        Ok(AssignmentDetail {
            assignment,
            engineer,
            project,
        })
    }

    /// Get an assignment joined with its engineer and project.
    pub fn get_assignment(&self, id: Id) -> Result<AssignmentDetail, Error> {
        let assignment = self
            .store
            .get_assignment(id)?
            .ok_or(Error::AssignmentNotFound(id))?;
        self.hydrate(assignment)
    }

    /// List assignments, optionally narrowed to one engineer or project.
    pub fn list_assignments(
        &self,
        filter: AssignmentFilter,
    ) -> Result<Vec<AssignmentDetail>, Error> {
        let mut assignments = self.store.list_assignments()?;
        if let Some(engineer_id) = filter.engineer_id {
            assignments.retain(|a| a.engineer_id == engineer_id);
        }
        if let Some(project_id) = filter.project_id {
            assignments.retain(|a| a.project_id == project_id);
        }
        assignments.into_iter().map(|a| self.hydrate(a)).collect()
    }

    /// Apply a partial update to an assignment.
    ///
    /// Changing the allocation or either date re-runs the capacity check
    /// with this assignment excluded, so its old allocation is not counted
    /// against its own rewrite. A date-only change still re-checks: sliding
    /// a window can collide with other assignments just as well as raising
    /// the percentage.
    pub fn update_assignment(
        &self,
        id: Id,
        update: AssignmentUpdate,
    ) -> Result<AssignmentDetail, Error> {
        let mut assignment = self
            .store
            .get_assignment(id)?
            .ok_or(Error::AssignmentNotFound(id))?;
        let engineer = self.get_engineer(assignment.engineer_id)?;
        let project = self.get_project(assignment.project_id)?;

        let affects_capacity = update.allocation_percentage.is_some()
            || update.start_date.is_some()
            || update.end_date.is_some();

        if let Some(allocation) = update.allocation_percentage {
            validate_allocation(allocation)?;
            assignment.allocation_percentage = allocation;
        }
        if let Some(start_date) = update.start_date {
            assignment.start_date = start_date;
        }
        if let Some(end_date) = update.end_date {
            assignment.end_date = end_date;
        }
        validate_dates(assignment.start_date, assignment.end_date)?;

        if let Some(role) = update.role {
            if role != assignment.role {
                let taken = self
                    .store
                    .assignments_for_engineer(assignment.engineer_id)?
                    .iter()
                    .any(|a| a.id != id && a.project_id == assignment.project_id && a.role == role);
                if taken {
                    return Err(Error::DuplicateAssignment { role });
                }
                assignment.role = role;
            }
        }

        if affects_capacity {
            let existing = self.store.assignments_for_engineer(assignment.engineer_id)?;
            let check = capacity::can_allocate(
                engineer.max_capacity,
                &existing,
                assignment.start_date,
                assignment.end_date,
                assignment.allocation_percentage,
                Some(id),
            );
            if !check.allowed {
                return Err(Error::InsufficientCapacity {
                    available: check.available_capacity,
                });
            }
        }

        self.store.put_assignment(&assignment)?;
        info!(assignment = %id, "assignment updated");

        Ok(AssignmentDetail {
            assignment,
            engineer,
            project,
        })
    }

    /// Delete an assignment.
    pub fn delete_assignment(&self, id: Id) -> Result<(), Error> {
        if !self.store.remove_assignment(id)? {
            return Err(Error::AssignmentNotFound(id));
        }
        info!(assignment = %id, "assignment deleted");
        Ok(())
    }

    fn hydrate(&self, assignment: Assignment) -> Result<AssignmentDetail, Error> {
        let engineer = self.get_engineer(assignment.engineer_id)?;
        let project = self.get_project(assignment.project_id)?;
        Ok(AssignmentDetail {
            assignment,
            engineer,
            project,
        })
    }
}

fn validate_allocation(percentage: u32) -> Result<(), Error> {
    if !(1..=100).contains(&percentage) {
        return Err(Error::AllocationOutOfRange(percentage));
    }
    Ok(())
}

fn validate_dates(start: NaiveDate, end: NaiveDate) -> Result<(), Error> {
    if start > end {
        return Err(Error::InvalidDateRange { start, end });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staffing() -> Staffing {
        Staffing::open(StoreConfig::temporary()).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_engineer(email: &str, skills: &[&str], max_capacity: u32) -> NewEngineer {
        NewEngineer {
            name: "Test Engineer".to_string(),
            email: email.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            seniority: Seniority::Mid,
            max_capacity,
            department: "Engineering".to_string(),
        }
    }

    fn new_project(name: &str, required_skills: &[&str]) -> NewProject {
        NewProject {
            name: name.to_string(),
            description: "A test project".to_string(),
            start_date: date(2025, 1, 1),
            end_date: date(2025, 12, 31),
            required_skills: required_skills.iter().map(|s| s.to_string()).collect(),
            team_size: 3,
            status: ProjectStatus::Planning,
        }
    }

    fn new_assignment(
        engineer_id: Id,
        project_id: Id,
        allocation: u32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> NewAssignment {
        NewAssignment {
            engineer_id,
            project_id,
            allocation_percentage: allocation,
            start_date: start,
            end_date: end,
            role: "Developer".to_string(),
        }
    }

    #[test]
    fn test_duplicate_email_refused() {
        let staffing = staffing();
        staffing
            .create_engineer(new_engineer("same@example.com", &[], 100))
            .unwrap();
        let result = staffing.create_engineer(new_engineer("same@example.com", &[], 100));
        assert!(matches!(result, Err(Error::EmailTaken(_))));
    }

    #[test]
    fn test_assignment_requires_existing_documents() {
        let staffing = staffing();
        let engineer = staffing
            .create_engineer(new_engineer("a@example.com", &["React"], 100))
            .unwrap();

        let missing_project = staffing.create_assignment(new_assignment(
            engineer.id,
            Id::generate(),
            50,
            date(2025, 1, 1),
            date(2025, 6, 30),
        ));
        assert!(matches!(missing_project, Err(Error::ProjectNotFound(_))));

        let project = staffing.create_project(new_project("Portal", &[])).unwrap();
        let missing_engineer = staffing.create_assignment(new_assignment(
            Id::generate(),
            project.id,
            50,
            date(2025, 1, 1),
            date(2025, 6, 30),
        ));
        assert!(matches!(missing_engineer, Err(Error::EngineerNotFound(_))));
    }

    #[test]
    fn test_skill_matching() {
        let staffing = staffing();
        let engineer = staffing
            .create_engineer(new_engineer("a@example.com", &["Go", "Rust"], 100))
            .unwrap();
        let picky = staffing
            .create_project(new_project("Portal", &["React", "TypeScript"]))
            .unwrap();

        let result = staffing.create_assignment(new_assignment(
            engineer.id,
            picky.id,
            50,
            date(2025, 1, 1),
            date(2025, 6, 30),
        ));
        assert!(matches!(result, Err(Error::MissingSkills)));

        // One shared label out of several is enough
        let open = staffing
            .create_project(new_project("Gateway", &["Rust", "Kubernetes"]))
            .unwrap();
        staffing
            .create_assignment(new_assignment(
                engineer.id,
                open.id,
                50,
                date(2025, 1, 1),
                date(2025, 6, 30),
            ))
            .unwrap();
    }

    #[test]
    fn test_project_without_required_skills_accepts_anyone() {
        let staffing = staffing();
        let engineer = staffing
            .create_engineer(new_engineer("a@example.com", &[], 100))
            .unwrap();
        let project = staffing.create_project(new_project("Portal", &[])).unwrap();

        staffing
            .create_assignment(new_assignment(
                engineer.id,
                project.id,
                50,
                date(2025, 1, 1),
                date(2025, 6, 30),
            ))
            .unwrap();
    }

    #[test]
    fn test_one_role_per_engineer_per_project() {
        let staffing = staffing();
        let engineer = staffing
            .create_engineer(new_engineer("a@example.com", &[], 100))
            .unwrap();
        let project = staffing.create_project(new_project("Portal", &[])).unwrap();

        staffing
            .create_assignment(new_assignment(
                engineer.id,
                project.id,
                30,
                date(2025, 1, 1),
                date(2025, 3, 31),
            ))
            .unwrap();

        // Same role again, even on disjoint dates, is a duplicate
        let duplicate = staffing.create_assignment(new_assignment(
            engineer.id,
            project.id,
            30,
            date(2025, 7, 1),
            date(2025, 9, 30),
        ));
        assert!(matches!(
            duplicate,
            Err(Error::DuplicateAssignment { role }) if role == "Developer"
        ));

        // A different role on the same project is fine
        let mut reviewer = new_assignment(
            engineer.id,
            project.id,
            30,
            date(2025, 7, 1),
            date(2025, 9, 30),
        );
        reviewer.role = "Reviewer".to_string();
        staffing.create_assignment(reviewer).unwrap();
    }

    #[test]
    fn test_capacity_rejection_carries_available() {
        let staffing = staffing();
        let engineer = staffing
            .create_engineer(new_engineer("a@example.com", &[], 100))
            .unwrap();
        let portal = staffing.create_project(new_project("Portal", &[])).unwrap();
        let gateway = staffing
            .create_project(new_project("Gateway", &[]))
            .unwrap();

        staffing
            .create_assignment(new_assignment(
                engineer.id,
                portal.id,
                70,
                date(2025, 1, 1),
                date(2025, 6, 30),
            ))
            .unwrap();

        let result = staffing.create_assignment(new_assignment(
            engineer.id,
            gateway.id,
            40,
            date(2025, 3, 1),
            date(2025, 4, 1),
        ));
        assert!(matches!(
            result,
            Err(Error::InsufficientCapacity { available: 30 })
        ));

        // The exact remainder still fits
        staffing
            .create_assignment(new_assignment(
                engineer.id,
                gateway.id,
                30,
                date(2025, 3, 1),
                date(2025, 4, 1),
            ))
            .unwrap();
    }

    #[test]
    fn test_allocation_bounds() {
        let staffing = staffing();
        let engineer = staffing
            .create_engineer(new_engineer("a@example.com", &[], 100))
            .unwrap();
        let project = staffing.create_project(new_project("Portal", &[])).unwrap();

        for bad in [0, 101, 500] {
            let result = staffing.create_assignment(new_assignment(
                engineer.id,
                project.id,
                bad,
                date(2025, 1, 1),
                date(2025, 6, 30),
            ));
            assert!(matches!(result, Err(Error::AllocationOutOfRange(p)) if p == bad));
        }
    }

    #[test]
    fn test_inverted_dates_refused() {
        let staffing = staffing();
        let engineer = staffing
            .create_engineer(new_engineer("a@example.com", &[], 100))
            .unwrap();
        let project = staffing.create_project(new_project("Portal", &[])).unwrap();

        let result = staffing.create_assignment(new_assignment(
            engineer.id,
            project.id,
            50,
            date(2025, 6, 30),
            date(2025, 1, 1),
        ));
        assert!(matches!(result, Err(Error::InvalidDateRange { .. })));
    }

    #[test]
    fn test_update_excludes_own_allocation() {
        let staffing = staffing();
        let engineer = staffing
            .create_engineer(new_engineer("a@example.com", &[], 100))
            .unwrap();
        let project = staffing.create_project(new_project("Portal", &[])).unwrap();

        let detail = staffing
            .create_assignment(new_assignment(
                engineer.id,
                project.id,
                70,
                date(2025, 1, 1),
                date(2025, 6, 30),
            ))
            .unwrap();

        // 70 -> 90 in place: the old 70 must not count against itself
        let updated = staffing
            .update_assignment(
                detail.assignment.id,
                AssignmentUpdate {
                    allocation_percentage: Some(90),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.assignment.allocation_percentage, 90);
    }

    #[test]
    fn test_date_only_update_still_rechecks_capacity() {
        let staffing = staffing();
        let engineer = staffing
            .create_engineer(new_engineer("a@example.com", &[], 100))
            .unwrap();
        let portal = staffing.create_project(new_project("Portal", &[])).unwrap();
        let gateway = staffing
            .create_project(new_project("Gateway", &[]))
            .unwrap();

        let first = staffing
            .create_assignment(new_assignment(
                engineer.id,
                portal.id,
                60,
                date(2025, 1, 1),
                date(2025, 3, 31),
            ))
            .unwrap();
        staffing
            .create_assignment(new_assignment(
                engineer.id,
                gateway.id,
                60,
                date(2025, 4, 1),
                date(2025, 6, 30),
            ))
            .unwrap();

        // Sliding the first window into the second must be refused even
        // though the percentage is untouched
        let result = staffing.update_assignment(
            first.assignment.id,
            AssignmentUpdate {
                end_date: Some(date(2025, 5, 15)),
                ..Default::default()
            },
        );
        assert!(matches!(
            result,
            Err(Error::InsufficientCapacity { available: 40 })
        ));
    }

    #[test]
    fn test_max_capacity_cannot_drop_below_commitments() {
        let staffing = staffing();
        let engineer = staffing
            .create_engineer(new_engineer("a@example.com", &[], 100))
            .unwrap();
        let project = staffing.create_project(new_project("Portal", &[])).unwrap();
        staffing
            .create_assignment(new_assignment(
                engineer.id,
                project.id,
                70,
                date(2025, 1, 1),
                date(2025, 6, 30),
            ))
            .unwrap();

        let result = staffing.update_engineer(
            engineer.id,
            EngineerUpdate {
                max_capacity: Some(60),
                ..Default::default()
            },
        );
        assert!(matches!(
            result,
            Err(Error::CapacityBelowAllocated { peak: 70 })
        ));

        // Exactly the peak is fine
        let updated = staffing
            .update_engineer(
                engineer.id,
                EngineerUpdate {
                    max_capacity: Some(70),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.max_capacity, 70);
    }

    #[test]
    fn test_project_delete_restricted_while_assigned() {
        let staffing = staffing();
        let engineer = staffing
            .create_engineer(new_engineer("a@example.com", &[], 100))
            .unwrap();
        let project = staffing.create_project(new_project("Portal", &[])).unwrap();
        let detail = staffing
            .create_assignment(new_assignment(
                engineer.id,
                project.id,
                50,
                date(2025, 1, 1),
                date(2025, 6, 30),
            ))
            .unwrap();

        let result = staffing.delete_project(project.id);
        assert!(matches!(result, Err(Error::ProjectInUse { assignments: 1 })));

        staffing.delete_assignment(detail.assignment.id).unwrap();
        staffing.delete_project(project.id).unwrap();
        assert!(matches!(
            staffing.get_project(project.id),
            Err(Error::ProjectNotFound(_))
        ));
    }

    #[test]
    fn test_capacity_report() {
        let staffing = staffing();
        let engineer = staffing
            .create_engineer(new_engineer("a@example.com", &[], 100))
            .unwrap();
        let portal = staffing.create_project(new_project("Portal", &[])).unwrap();
        let gateway = staffing
            .create_project(new_project("Gateway", &[]))
            .unwrap();

        staffing
            .create_assignment(new_assignment(
                engineer.id,
                portal.id,
                50,
                date(2025, 1, 1),
                date(2025, 6, 30),
            ))
            .unwrap();
        staffing
            .create_assignment(new_assignment(
                engineer.id,
                gateway.id,
                30,
                date(2025, 6, 1),
                date(2025, 12, 31),
            ))
            .unwrap();

        let june = staffing.capacity_report(engineer.id, date(2025, 6, 15)).unwrap();
        assert_eq!(june.total_allocated, 80);
        assert_eq!(june.available_capacity, 20);
        assert_eq!(june.active.len(), 2);

        let march = staffing.capacity_report(engineer.id, date(2025, 3, 1)).unwrap();
        assert_eq!(march.total_allocated, 50);
        assert_eq!(march.active.len(), 1);
        assert_eq!(march.active[0].project_name, "Portal");
    }

    #[test]
    fn test_report_survives_overcommitted_data() {
        let staffing = staffing();
        let engineer = staffing
            .create_engineer(new_engineer("a@example.com", &[], 100))
            .unwrap();

        // Two racing writers can both pass the check; emulate the aftermath
        // by writing directly to the store
        for allocation in [80, 50] {
            let assignment = Assignment::new(
                engineer.id,
                Id::generate(),
                allocation,
                date(2025, 1, 1),
                date(2025, 6, 30),
                "Developer",
            );
            staffing.store().put_assignment(&assignment).unwrap();
        }

        let report = staffing.capacity_report(engineer.id, date(2025, 3, 1)).unwrap();
        assert_eq!(report.total_allocated, 130);
        assert_eq!(report.available_capacity, -30);
    }
}
