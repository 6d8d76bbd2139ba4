use thiserror::Error;

use crate::value_objects::{
    AssignmentTarget, RequestId, TransportId, UserId, WasteCategory, WasteEntryId,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
    #[error("category/assignment mismatch: {category} waste must be assigned to {expected}")]
    AssignmentMismatch {
        category: WasteCategory,
        expected: AssignmentTarget,
    },
    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },
    #[error("{kind} '{id}' cannot move from {from} to {to}")]
    InvalidTransition {
        kind: &'static str,
        id: String,
        from: &'static str,
        to: &'static str,
    },
    #[error("waste entry '{0}' is no longer available")]
    EntryUnavailable(WasteEntryId),
    #[error("waste entry '{entry}' is assigned to {assigned}, not {requested}")]
    TargetMismatch {
        entry: WasteEntryId,
        assigned: AssignmentTarget,
        requested: AssignmentTarget,
    },
    #[error("waste entry '{entry}' already has an open pickup request '{request}'")]
    OpenRequestExists {
        entry: WasteEntryId,
        request: RequestId,
    },
    #[error("pickup request '{request}' already has active transportation '{transport}'")]
    TransportExists {
        request: RequestId,
        transport: TransportId,
    },
    #[error("user '{0}' already exists")]
    DuplicateUser(UserId),
}

impl DomainError {
    pub fn not_found(kind: &'static str, id: impl ToString) -> Self {
        DomainError::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        DomainError::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}
