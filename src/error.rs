//! Error Types
//!
//! Remote failures, client-side validation failures, and the facade's
//! outcome-aware wrapper around both.

use thiserror::Error;

use crate::models::ArticleId;

pub type ApiResult<T> = Result<T, ApiError>;
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Failures reported by the article service
///
/// `Clone` so that a single in-flight list request can hand the same
/// outcome to every caller waiting on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("article {0} not found")]
    NotFound(ArticleId),
    #[error("server responded with {status}: {message}")]
    Status { status: u16, message: String },
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// Input rejected before anything is sent
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("name is required")]
    EmptyName,
    #[error("unit is required")]
    EmptyUnit,
    #[error("price must be non-negative, got {0}")]
    NegativePrice(f64),
    #[error("price is not a number: {0:?}")]
    InvalidPrice(String),
    #[error("amount must be greater than zero")]
    NonPositiveAmount,
    #[error("usage range ends before it starts")]
    InvalidDateRange,
}

/// Outcome of a failed facade operation
///
/// The variant tells the caller what happened to local state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InventoryError {
    /// Rejected client-side; no request was made and the cache is untouched
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The request failed before any local state changed
    #[error(transparent)]
    Api(#[from] ApiError),
    /// The request failed and the optimistic change was reverted
    #[error("{0} (local changes reverted)")]
    RolledBack(#[source] ApiError),
    /// The request failed and the optimistic change is still in the cache
    #[error("{0} (local changes kept)")]
    Unreconciled(#[source] ApiError),
}

impl InventoryError {
    /// The original service error, if the failure came from the service
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            InventoryError::Validation(_) => None,
            InventoryError::Api(e) | InventoryError::RolledBack(e) | InventoryError::Unreconciled(e) => Some(e),
        }
    }

    pub fn is_rolled_back(&self) -> bool {
        matches!(self, InventoryError::RolledBack(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_is_exposed_for_every_remote_outcome() {
        let original = ApiError::Status { status: 500, message: "boom".to_string() };

        assert_eq!(InventoryError::Api(original.clone()).api_error(), Some(&original));
        assert_eq!(InventoryError::RolledBack(original.clone()).api_error(), Some(&original));
        assert_eq!(InventoryError::Unreconciled(original.clone()).api_error(), Some(&original));
        assert_eq!(InventoryError::Validation(ValidationError::EmptyName).api_error(), None);
    }

    #[test]
    fn test_display_mentions_local_state() {
        let err = InventoryError::RolledBack(ApiError::NotFound(ArticleId(4)));
        assert_eq!(err.to_string(), "article 4 not found (local changes reverted)");
        assert!(err.is_rolled_back());
    }
}
