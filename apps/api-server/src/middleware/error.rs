//! Error handling middleware - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use comms_core::BoardError;
use comms_shared::ErrorResponse;
use std::fmt;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    Board(BoardError),
    BadRequest(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Board(err) => write!(f, "{}", err),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Board(BoardError::PermissionDenied { .. }) => StatusCode::FORBIDDEN,
            AppError::Board(BoardError::Validation { .. }) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Board(BoardError::NotFound { .. }) => StatusCode::NOT_FOUND,
            AppError::Board(BoardError::InvalidTransition { .. }) => StatusCode::CONFLICT,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::Board(err @ BoardError::PermissionDenied { .. }) => {
                ErrorResponse::permission_denied(err.to_string())
            }
            AppError::Board(BoardError::Validation { fields }) => {
                ErrorResponse::validation(fields.iter().map(|f| f.to_string()).collect())
            }
            AppError::Board(err @ BoardError::NotFound { .. }) => {
                ErrorResponse::not_found(err.to_string())
            }
            AppError::Board(err @ BoardError::InvalidTransition { .. }) => {
                ErrorResponse::invalid_transition(err.to_string())
            }
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<BoardError> for AppError {
    fn from(err: BoardError) -> Self {
        AppError::Board(err)
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use comms_core::domain::Status;

    #[test]
    fn board_tags_map_to_the_expected_status_codes() {
        let cases = [
            (
                BoardError::PermissionDenied { capability: "edit" },
                StatusCode::FORBIDDEN,
            ),
            (
                BoardError::Validation {
                    fields: vec!["title"],
                },
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                BoardError::NotFound {
                    id: uuid::Uuid::nil(),
                },
                StatusCode::NOT_FOUND,
            ),
            (
                BoardError::InvalidTransition {
                    from: Status::Published,
                    to: None,
                },
                StatusCode::CONFLICT,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(AppError::from(err).status_code(), expected);
        }
    }
}
