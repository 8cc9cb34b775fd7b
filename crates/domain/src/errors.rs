use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid configuration: {0}")]
    ConfigInvalid(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Inconsistent state: {0}")]
    InconsistentState(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl DomainError {
    /// Errors a later cycle may succeed on without operator action.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            DomainError::StorageUnavailable(_)
                | DomainError::QueryFailed(_)
                | DomainError::InconsistentState(_)
        )
    }
}
