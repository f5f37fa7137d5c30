//! Sync Errors

use thiserror::Error;

/// Common result type for backend calls
pub type SyncResult<T> = Result<T, SyncError>;

/// A request to the item service did not succeed.
///
/// Transport failures and non-2xx responses are not told apart.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("backend error: {0}")]
    Backend(String),
}

/// Form input rejected before any request is made
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name must be non-empty.")]
    EmptyName,
    #[error("Price must be a valid number, got {0:?}.")]
    InvalidPrice(String),
}

/// Failure of an add operation
#[derive(Debug, Error)]
pub enum AddError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Sync(#[from] SyncError),
}
