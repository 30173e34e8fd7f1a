use marquee_core::{MovieId, ValidationError};
use marquee_storage::StorageError;

/// Errors returned by [`crate::Catalog`] operations.
///
/// `NotFound` and `InvalidField` are caller errors; `Storage` is a backend
/// failure passed through unchanged.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("movie {id} not found")]
    NotFound { id: MovieId },

    #[error(transparent)]
    InvalidField(#[from] ValidationError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl CatalogError {
    /// Whether the caller can fix the request (as opposed to a store failure).
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, CatalogError::Storage(_))
    }
}
