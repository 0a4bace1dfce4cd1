//! ProjectBoard: the dashboard's project list.
//!
//! The dashboard is a flat list of campaign cards with create,
//! duplicate, delete, search, and status filtering. Search and filters
//! are read-only views over the list; only the CRUD entry points
//! mutate.

use uuid::Uuid;

use crate::error::{BoardError, BoardResult};
use crate::project::model::{AdFormat, Project, ProjectStatus};

/// The dashboard state: projects in display order.
#[derive(Debug, Clone, Default)]
pub struct ProjectBoard {
    projects: Vec<Project>,
}

impl ProjectBoard {
    /// Creates an empty dashboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a dashboard seeded with the sample catalog.
    pub fn with_sample_projects() -> Self {
        Self {
            projects: crate::project::model::sample_projects(),
        }
    }

    /// Projects in display order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Number of projects.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// True if the dashboard is empty.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Looks up a project by identifier.
    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.projects.iter().position(|p| p.id == id)
    }

    /// The "New Project" affordance: a fresh draft at the top of the
    /// grid. Returns the new identifier.
    pub fn create(&mut self, title: impl Into<String>, format: AdFormat) -> String {
        let project = Project::create(title).with_format(format);
        let id = project.id.clone();
        self.projects.insert(0, project);
        id
    }

    /// Duplicates a project into the slot right after it.
    pub fn duplicate(&mut self, id: &str) -> BoardResult<String> {
        let pos = self
            .position(id)
            .ok_or_else(|| BoardError::project_not_found(id))?;
        let copy = self.projects[pos].duplicate_as(Uuid::new_v4().to_string());
        let new_id = copy.id.clone();
        self.projects.insert(pos + 1, copy);
        Ok(new_id)
    }

    /// Deletes a project.
    pub fn delete(&mut self, id: &str) -> BoardResult<()> {
        let pos = self
            .position(id)
            .ok_or_else(|| BoardError::project_not_found(id))?;
        self.projects.remove(pos);
        Ok(())
    }

    /// Renames a project.
    pub fn rename(&mut self, id: &str, title: impl Into<String>) -> BoardResult<()> {
        let pos = self
            .position(id)
            .ok_or_else(|| BoardError::project_not_found(id))?;
        self.projects[pos].title = title.into();
        Ok(())
    }

    /// Moves a project to a new lifecycle stage.
    pub fn set_status(&mut self, id: &str, status: ProjectStatus) -> BoardResult<()> {
        let pos = self
            .position(id)
            .ok_or_else(|| BoardError::project_not_found(id))?;
        self.projects[pos].status = status;
        Ok(())
    }

    /// Case-insensitive title search. A blank query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Project> {
        let needle = query.trim().to_lowercase();
        self.projects
            .iter()
            .filter(|p| needle.is_empty() || p.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// Projects in one lifecycle stage.
    pub fn with_status(&self, status: ProjectStatus) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.status == status).collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================
