//! Standardized API response types (RFC 7807 compliant for errors).

use serde::{Deserialize, Serialize};

/// Standard successful API response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }
}

/// RFC 7807 Problem Details for HTTP APIs.
///
/// The `type` member carries the board's stable error tag
/// (`permission-denied`, `validation`, `not-found`, `invalid-transition`)
/// so clients can branch without parsing prose.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable machine-readable tag identifying the problem type.
    #[serde(rename = "type")]
    pub error_type: String,

    /// A short, human-readable summary of the problem type.
    pub title: String,

    /// The HTTP status code.
    pub status: u16,

    /// A human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Offending field names, present on validation failures.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
}

impl ErrorResponse {
    pub fn new(status: u16, error_type: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            error_type: error_type.into(),
            title: title.into(),
            status,
            detail: None,
            fields: Vec::new(),
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    // Constructors for the board's four recoverable error tags.

    pub fn permission_denied(detail: impl Into<String>) -> Self {
        Self::new(403, "permission-denied", "Permission Denied").with_detail(detail)
    }

    pub fn validation(fields: Vec<String>) -> Self {
        let mut response = Self::new(422, "validation", "Validation Failed")
            .with_detail(format!("invalid field(s): {}", fields.join(", ")));
        response.fields = fields;
        response
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(404, "not-found", "Not Found").with_detail(detail)
    }

    pub fn invalid_transition(detail: impl Into<String>) -> Self {
        Self::new(409, "invalid-transition", "Invalid Status Transition").with_detail(detail)
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(400, "bad-request", "Bad Request").with_detail(detail)
    }

    pub fn internal_error() -> Self {
        Self::new(500, "internal", "Internal Server Error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_response_lists_fields() {
        let response = ErrorResponse::validation(vec!["title".into(), "deadline".into()]);
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"type\":\"validation\""));
        assert!(json.contains("\"fields\":[\"title\",\"deadline\"]"));
    }

    #[test]
    fn empty_optionals_are_omitted_from_the_wire() {
        let json = serde_json::to_string(&ErrorResponse::internal_error()).unwrap();
        assert!(!json.contains("detail"));
        assert!(!json.contains("fields"));
    }
}
