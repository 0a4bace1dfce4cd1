//! Data models for the project dashboard.
//!
//! A project is one video-ad campaign card on the dashboard. Like the
//! storyboard, everything here is local mock state — `last_modified` is
//! a display string, not a clock reading.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::storyboard::model::COPY_SUFFIX;

/// Lifecycle stage of a project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Draft,
    InProgress,
    Completed,
    Review,
}

impl ProjectStatus {
    /// UI label ("in progress", not "in-progress").
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Draft => "draft",
            ProjectStatus::InProgress => "in progress",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Review => "review",
        }
    }
}

/// Output aspect ratio of a project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdFormat {
    #[default]
    #[serde(rename = "16:9")]
    Landscape,
    #[serde(rename = "9:16")]
    Portrait,
    #[serde(rename = "1:1")]
    Square,
}

impl AdFormat {
    /// UI label for this format.
    pub fn label(&self) -> &'static str {
        match self {
            AdFormat::Landscape => "16:9",
            AdFormat::Portrait => "9:16",
            AdFormat::Square => "1:1",
        }
    }
}

/// One video-ad campaign on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    /// Unique identifier, immutable once created.
    pub id: String,
    /// Campaign title.
    pub title: String,
    /// Lifecycle stage.
    pub status: ProjectStatus,
    /// Opaque thumbnail reference, if one has been rendered.
    pub thumbnail: Option<String>,
    /// Target run length label, e.g. "0:30".
    pub duration: String,
    /// Number of collaborators shown on the card.
    pub collaborators: u32,
    /// Display string, e.g. "2 hours ago".
    pub last_modified: String,
    /// Output aspect ratio.
    pub format: AdFormat,
}

impl Project {
    /// Creates a project with the given ID and title.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            duration: "0:00".to_string(),
            collaborators: 1,
            last_modified: "Just now".to_string(),
            ..Default::default()
        }
    }

    /// Creates a draft project under a freshly minted identifier.
    pub fn create(title: impl Into<String>) -> Self {
        Self::new(Uuid::new_v4().to_string(), title)
    }

    /// Builder: Set status.
    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }

    /// Builder: Set duration label.
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = duration.into();
        self
    }

    /// Builder: Set collaborator count.
    pub fn with_collaborators(mut self, collaborators: u32) -> Self {
        self.collaborators = collaborators;
        self
    }

    /// Builder: Set the last-modified display string.
    pub fn with_last_modified(mut self, label: impl Into<String>) -> Self {
        self.last_modified = label.into();
        self
    }

    /// Builder: Set the output format.
    pub fn with_format(mut self, format: AdFormat) -> Self {
        self.format = format;
        self
    }

    /// Clones this project under a new identifier with a decorated title.
    pub fn duplicate_as(&self, new_id: impl Into<String>) -> Self {
        Self {
            id: new_id.into(),
            title: format!("{}{}", self.title, COPY_SUFFIX),
            ..self.clone()
        }
    }
}

/// The seed dashboard catalog.
pub fn sample_projects() -> Vec<Project> {
    vec![
        Project::new("1", "Summer Fashion Campaign")
            .with_status(ProjectStatus::InProgress)
            .with_duration("0:30")
            .with_collaborators(3)
            .with_last_modified("2 hours ago")
            .with_format(AdFormat::Landscape),
        Project::new("2", "Product Launch Teaser")
            .with_status(ProjectStatus::Completed)
            .with_duration("0:15")
            .with_collaborators(2)
            .with_last_modified("1 day ago")
            .with_format(AdFormat::Portrait),
        Project::new("3", "Brand Story Video")
            .with_status(ProjectStatus::Review)
            .with_duration("1:00")
            .with_collaborators(5)
            .with_last_modified("3 days ago")
            .with_format(AdFormat::Landscape),
        Project::new("4", "Social Media Ad Set")
            .with_status(ProjectStatus::Draft)
            .with_duration("0:20")
            .with_collaborators(1)
            .with_last_modified("5 days ago")
            .with_format(AdFormat::Square),
        Project::new("5", "Holiday Campaign")
            .with_status(ProjectStatus::InProgress)
            .with_duration("0:45")
            .with_collaborators(4)
            .with_last_modified("1 week ago")
            .with_format(AdFormat::Portrait),
        Project::new("6", "Tutorial Series")
            .with_status(ProjectStatus::Draft)
            .with_duration("2:30")
            .with_collaborators(2)
            .with_last_modified("2 weeks ago")
            .with_format(AdFormat::Landscape),
    ]
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_builder() {
        let project = Project::new("p-1", "Summer Fashion Campaign")
            .with_status(ProjectStatus::InProgress)
            .with_format(AdFormat::Portrait);

        assert_eq!(project.id, "p-1");
        assert_eq!(project.status, ProjectStatus::InProgress);
        assert_eq!(project.format.label(), "9:16");
    }

    #[test]
    fn test_status_wire_and_label() {
        let json = serde_json::to_string(&ProjectStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        assert_eq!(ProjectStatus::InProgress.label(), "in progress");
    }

    #[test]
    fn test_format_wire_names() {
        let json = serde_json::to_string(&AdFormat::Square).unwrap();
        assert_eq!(json, "\"1:1\"");
        let back: AdFormat = serde_json::from_str("\"9:16\"").unwrap();
        assert_eq!(back, AdFormat::Portrait);
    }

    #[test]
    fn test_duplicate_as_decorates_title() {
        let source = Project::new("p-1", "Brand Story Video").with_collaborators(5);
        let copy = source.duplicate_as("p-2");

        assert_eq!(copy.id, "p-2");
        assert_eq!(copy.title, "Brand Story Video (Copy)");
        assert_eq!(copy.collaborators, 5);
    }

    #[test]
    fn test_sample_projects_shape() {
        let projects = sample_projects();
        assert_eq!(projects.len(), 6);
        assert_eq!(projects[0].title, "Summer Fashion Campaign");
        assert_eq!(projects[3].format, AdFormat::Square);
    }
}
