//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

use crate::domain::Status;

/// Board errors - every mutation failure carries one of these four tags.
/// All are recoverable by the caller; none are fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("permission denied: role lacks the {capability} capability")]
    PermissionDenied { capability: &'static str },

    #[error("validation failed: {}", .fields.join(", "))]
    Validation { fields: Vec<&'static str> },

    #[error("communication {id} not found")]
    NotFound { id: Uuid },

    /// A status change (or a delete, when `to` is `None`) that violates the
    /// one-directional lifecycle.
    #[error("invalid status transition: {from} -> {}", .to.map(Status::as_str).unwrap_or("deleted"))]
    InvalidTransition { from: Status, to: Option<Status> },
}

impl BoardError {
    /// Stable machine-readable tag, used as the RFC 7807 `type` member.
    pub fn tag(&self) -> &'static str {
        match self {
            BoardError::PermissionDenied { .. } => "permission-denied",
            BoardError::Validation { .. } => "validation",
            BoardError::NotFound { .. } => "not-found",
            BoardError::InvalidTransition { .. } => "invalid-transition",
        }
    }
}
