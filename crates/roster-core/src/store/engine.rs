//! Staffing store implementation.

use serde::de::DeserializeOwned;
use serde::Serialize;
use sled::{Db, Tree};

use super::StoreConfig;
use crate::error::Error;
use crate::id::Id;
use crate::model::{Assignment, Engineer, Project};

/// Tree name for engineer documents.
const ENGINEERS_TREE: &str = "engineers";

/// Tree name for project documents.
const PROJECTS_TREE: &str = "projects";

/// Tree name for assignment documents.
const ASSIGNMENTS_TREE: &str = "assignments";

/// Tree name for the unique engineer email index (email -> engineer id).
const EMAIL_INDEX_TREE: &str = "index:engineer_email";

/// The staffing store wrapping sled.
///
/// Each document kind lives in its own tree, keyed by the raw id bytes and
/// holding the JSON encoding of the document.
pub struct StaffingStore {
    /// The underlying sled database.
    db: Db,

    /// Tree for engineer documents.
    engineers: Tree,

    /// Tree for project documents.
    projects: Tree,

    /// Tree for assignment documents.
    assignments: Tree,

    /// Unique index mapping email addresses to engineer ids.
    email_index: Tree,
}

impl StaffingStore {
    /// Open or create a staffing store with the given configuration.
    pub fn open(config: StoreConfig) -> Result<Self, Error> {
        let db = config.to_sled_config().open()?;
        let engineers = db.open_tree(ENGINEERS_TREE)?;
        let projects = db.open_tree(PROJECTS_TREE)?;
        let assignments = db.open_tree(ASSIGNMENTS_TREE)?;
        let email_index = db.open_tree(EMAIL_INDEX_TREE)?;

        Ok(Self {
            db,
            engineers,
            projects,
            assignments,
            email_index,
        })
    }

    /// Check if the database was recovered from a previous crash.
    pub fn was_recovered(&self) -> bool {
        self.db.was_recovered()
    }

    // ========== Engineers ==========

    /// Insert or replace an engineer, enforcing email uniqueness.
    ///
    /// When an existing engineer changes address the stale index entry is
    /// dropped so the old email becomes available again.
    pub fn put_engineer(&self, engineer: &Engineer) -> Result<(), Error> {
        if let Some(existing) = self.email_index.get(engineer.email.as_bytes())? {
            if existing.as_ref() != engineer.id.as_bytes() {
                return Err(Error::EmailTaken(engineer.email.clone()));
            }
        }

        if let Some(previous) = self.get_engineer(engineer.id)? {
            if previous.email != engineer.email {
                self.email_index.remove(previous.email.as_bytes())?;
            }
        }

        Self::put_doc(&self.engineers, engineer.id, engineer)?;
        self.email_index
            .insert(engineer.email.as_bytes(), engineer.id.as_bytes())?;
        Ok(())
    }

    /// Get an engineer by id.
    pub fn get_engineer(&self, id: Id) -> Result<Option<Engineer>, Error> {
        Self::get_doc(&self.engineers, id)
    }

    /// List all engineers.
    pub fn list_engineers(&self) -> Result<Vec<Engineer>, Error> {
        Self::list_docs(&self.engineers)
    }

    // ========== Projects ==========

    /// Insert or replace a project.
    pub fn put_project(&self, project: &Project) -> Result<(), Error> {
        Self::put_doc(&self.projects, project.id, project)
    }

    /// Get a project by id.
    pub fn get_project(&self, id: Id) -> Result<Option<Project>, Error> {
        Self::get_doc(&self.projects, id)
    }

    /// List all projects.
    pub fn list_projects(&self) -> Result<Vec<Project>, Error> {
        Self::list_docs(&self.projects)
    }

    /// Remove a project. Returns whether it existed.
    pub fn remove_project(&self, id: Id) -> Result<bool, Error> {
        Ok(self.projects.remove(id.as_bytes())?.is_some())
    }

    // ========== Assignments ==========

    /// Insert or replace an assignment.
    pub fn put_assignment(&self, assignment: &Assignment) -> Result<(), Error> {
        Self::put_doc(&self.assignments, assignment.id, assignment)
    }

    /// Get an assignment by id.
    pub fn get_assignment(&self, id: Id) -> Result<Option<Assignment>, Error> {
        Self::get_doc(&self.assignments, id)
    }

    /// List all assignments.
    pub fn list_assignments(&self) -> Result<Vec<Assignment>, Error> {
        Self::list_docs(&self.assignments)
    }

    /// Remove an assignment. Returns whether it existed.
    pub fn remove_assignment(&self, id: Id) -> Result<bool, Error> {
        Ok(self.assignments.remove(id.as_bytes())?.is_some())
    }

    /// All assignments committing the given engineer.
    pub fn assignments_for_engineer(&self, engineer_id: Id) -> Result<Vec<Assignment>, Error> {
        let mut assignments = self.list_assignments()?;
        assignments.retain(|a| a.engineer_id == engineer_id);
        Ok(assignments)
    }

    /// All assignments attached to the given project.
    pub fn assignments_for_project(&self, project_id: Id) -> Result<Vec<Assignment>, Error> {
        let mut assignments = self.list_assignments()?;
        assignments.retain(|a| a.project_id == project_id);
        Ok(assignments)
    }

    /// Whether the store holds no documents at all.
    pub fn is_empty(&self) -> bool {
        self.engineers.is_empty() && self.projects.is_empty() && self.assignments.is_empty()
    }

    /// Flush all pending writes to disk.
    pub fn flush(&self) -> Result<(), Error> {
        self.db.flush()?;
        Ok(())
    }

    /// Get database size in bytes.
    pub fn size_on_disk(&self) -> Result<u64, Error> {
        Ok(self.db.size_on_disk()?)
    }

    // ========== Codec helpers ==========

    fn put_doc<T: Serialize>(tree: &Tree, id: Id, doc: &T) -> Result<(), Error> {
        tree.insert(id.as_bytes(), serde_json::to_vec(doc)?)?;
        Ok(())
    }

    fn get_doc<T: DeserializeOwned>(tree: &Tree, id: Id) -> Result<Option<T>, Error> {
        match tree.get(id.as_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    fn list_docs<T: DeserializeOwned>(tree: &Tree) -> Result<Vec<T>, Error> {
        tree.iter()
            .values()
            .map(|value| Ok(serde_json::from_slice(&value?)?))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn test_store() -> StaffingStore {
        StaffingStore::open(StoreConfig::temporary()).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_engineer_roundtrip() {
        let store = test_store();
        let engineer = Engineer::new("Sam Chen", "sam@example.com").with_skills(["React"]);

        store.put_engineer(&engineer).unwrap();

        let retrieved = store.get_engineer(engineer.id).unwrap().unwrap();
        assert_eq!(retrieved, engineer);
        assert_eq!(store.list_engineers().unwrap().len(), 1);
    }

    #[test]
    fn test_email_uniqueness() {
        let store = test_store();
        let first = Engineer::new("Sam Chen", "shared@example.com");
        store.put_engineer(&first).unwrap();

        let second = Engineer::new("Ana Silva", "shared@example.com");
        let result = store.put_engineer(&second);
        assert!(matches!(result, Err(Error::EmailTaken(email)) if email == "shared@example.com"));

        // Re-saving the original owner is an update, not a violation
        store.put_engineer(&first).unwrap();
    }

    #[test]
    fn test_email_change_frees_old_address() {
        let store = test_store();
        let mut engineer = Engineer::new("Sam Chen", "old@example.com");
        store.put_engineer(&engineer).unwrap();

        engineer.email = "new@example.com".to_string();
        store.put_engineer(&engineer).unwrap();

        // The old address is free for someone else now
        let newcomer = Engineer::new("Ana Silva", "old@example.com");
        store.put_engineer(&newcomer).unwrap();

        // But the new one is taken
        let another = Engineer::new("Kim Okafor", "new@example.com");
        assert!(store.put_engineer(&another).is_err());
    }

    #[test]
    fn test_project_roundtrip_and_remove() {
        let store = test_store();
        let project = Project::new(
            "Portal",
            "Rebuild the portal",
            date(2025, 1, 1),
            date(2025, 6, 30),
            3,
        );

        store.put_project(&project).unwrap();
        assert_eq!(store.get_project(project.id).unwrap().unwrap(), project);

        assert!(store.remove_project(project.id).unwrap());
        assert!(store.get_project(project.id).unwrap().is_none());
        assert!(!store.remove_project(project.id).unwrap());
    }

    #[test]
    fn test_assignments_filtered_by_engineer_and_project() {
        let store = test_store();
        let engineer_a = Id::generate();
        let engineer_b = Id::generate();
        let project = Id::generate();

        let a1 = Assignment::new(
            engineer_a,
            project,
            50,
            date(2025, 1, 1),
            date(2025, 6, 30),
            "Developer",
        );
        let a2 = Assignment::new(
            engineer_a,
            Id::generate(),
            30,
            date(2025, 2, 1),
            date(2025, 3, 31),
            "Reviewer",
        );
        let a3 = Assignment::new(
            engineer_b,
            project,
            80,
            date(2025, 1, 1),
            date(2025, 6, 30),
            "Tech Lead",
        );
        for a in [&a1, &a2, &a3] {
            store.put_assignment(a).unwrap();
        }

        let for_a = store.assignments_for_engineer(engineer_a).unwrap();
        assert_eq!(for_a.len(), 2);
        assert!(for_a.iter().all(|a| a.engineer_id == engineer_a));

        let for_project = store.assignments_for_project(project).unwrap();
        assert_eq!(for_project.len(), 2);
        assert!(for_project.iter().all(|a| a.project_id == project));
    }

    #[test]
    fn test_is_empty() {
        let store = test_store();
        assert!(store.is_empty());

        store
            .put_engineer(&Engineer::new("Sam Chen", "sam@example.com"))
            .unwrap();
        assert!(!store.is_empty());
    }

    #[test]
    fn test_persistence() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::new(dir.path());
        let engineer = Engineer::new("Sam Chen", "sam@example.com");

        // Write data
        {
            let store = StaffingStore::open(config.clone()).unwrap();
            store.put_engineer(&engineer).unwrap();
            store.flush().unwrap();
        }

        // Reopen and verify
        {
            let store = StaffingStore::open(config).unwrap();
            let retrieved = store.get_engineer(engineer.id).unwrap().unwrap();
            assert_eq!(retrieved, engineer);

            // The email index survived too
            let clash = Engineer::new("Ana Silva", "sam@example.com");
            assert!(store.put_engineer(&clash).is_err());
        }
    }
}
