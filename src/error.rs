//! Error types for the studio state engine.

use thiserror::Error;

/// Result type alias for board operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// Errors that can occur while mutating studio state.
#[derive(Error, Debug)]
pub enum BoardError {
    /// Frame not found in the storyboard.
    #[error("Frame not found: {0}")]
    FrameNotFound(String),

    /// A frame with this identifier already exists.
    #[error("Duplicate frame id: {0}")]
    DuplicateFrame(String),

    /// Project not found on the dashboard.
    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    /// Script analysis was asked to run on a blank script.
    #[error("Script is empty")]
    EmptyScript,

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl BoardError {
    /// Creates a FrameNotFound error.
    pub fn frame_not_found(id: impl Into<String>) -> Self {
        Self::FrameNotFound(id.into())
    }

    /// Creates a DuplicateFrame error.
    pub fn duplicate_frame(id: impl Into<String>) -> Self {
        Self::DuplicateFrame(id.into())
    }

    /// Creates a ProjectNotFound error.
    pub fn project_not_found(id: impl Into<String>) -> Self {
        Self::ProjectNotFound(id.into())
    }

    /// Creates a Serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }
}
