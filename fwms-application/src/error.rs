use fwms_domain::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("forbidden: {0}")]
    Forbidden(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<DomainError> for AppError {
    fn from(value: DomainError) -> Self {
        let message = value.to_string();
        match value {
            DomainError::MissingField(_)
            | DomainError::InvalidField { .. }
            | DomainError::AssignmentMismatch { .. }
            | DomainError::TargetMismatch { .. } => AppError::BadRequest(message),
            DomainError::NotFound { .. } => AppError::NotFound(message),
            DomainError::InvalidTransition { .. }
            | DomainError::EntryUnavailable(_)
            | DomainError::OpenRequestExists { .. }
            | DomainError::TransportExists { .. }
            | DomainError::DuplicateUser(_) => AppError::Conflict(message),
        }
    }
}
