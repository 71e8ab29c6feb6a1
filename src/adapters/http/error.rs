//! Shared HTTP error envelope.

use serde::Serialize;

/// Standard error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            code: "CONFLICT".to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: message.into(),
        }
    }

    /// Generic failure body. Store error text never goes to the caller;
    /// the detail is logged at the mapping site instead.
    pub fn internal() -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: "Internal server error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_carries_message() {
        let error = ErrorResponse::bad_request("Field 'date' cannot be empty");
        assert_eq!(error.code, "BAD_REQUEST");
        assert_eq!(error.message, "Field 'date' cannot be empty");
    }

    #[test]
    fn internal_never_carries_detail() {
        let error = ErrorResponse::internal();
        assert_eq!(error.code, "INTERNAL_ERROR");
        assert_eq!(error.message, "Internal server error");
    }
}
