//! Store-boundary error types.

use thiserror::Error;
use uuid::Uuid;

/// Errors rejected at the store boundary.
///
/// A failed operation leaves the store exactly as it was; nothing is
/// partially applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("project not found: {0}")]
    ProjectNotFound(Uuid),

    #[error("item not found: {0}")]
    ItemNotFound(Uuid),

    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid transition: {0:?}")]
    InvalidTransition(String),

    #[error("a project with id {0} already exists")]
    DuplicateProject(Uuid),

    #[error("a media item with id {0} already exists in this project")]
    DuplicateMediaItem(Uuid),
}
