use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod api;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The backing store cannot be reached; callers surface this as a
    /// service-unavailable condition rather than a generic failure.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("repository error: {0}")]
    Repository(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        if err.is_unavailable() {
            ServiceError::Unavailable(err.to_string())
        } else {
            ServiceError::Repository(err.to_string())
        }
    }
}
