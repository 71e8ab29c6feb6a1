//! Error types for the domain layer.

use thiserror::Error;

/// Errors surfaced by the meal registry and the user directory.
///
/// The taxonomy is deliberately small: validation failures are detected
/// before the store is touched, duplicate emails and unknown emails come
/// from the store's constraint machinery and from lookups, and everything
/// else collapses into an opaque store fault.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Field '{field}' cannot be empty")]
    Validation { field: &'static str },

    #[error("A user with email '{email}' already exists")]
    DuplicateEmail { email: String },

    #[error("No user found for email '{email}'")]
    UnknownEmail { email: String },

    #[error("Storage failure: {0}")]
    Store(String),
}

impl DomainError {
    /// Creates a validation error for a missing or empty field.
    pub fn validation(field: &'static str) -> Self {
        DomainError::Validation { field }
    }

    /// Creates a duplicate-email error.
    pub fn duplicate_email(email: impl Into<String>) -> Self {
        DomainError::DuplicateEmail {
            email: email.into(),
        }
    }

    /// Creates an unknown-email error.
    pub fn unknown_email(email: impl Into<String>) -> Self {
        DomainError::UnknownEmail {
            email: email.into(),
        }
    }

    /// Creates an opaque store fault.
    pub fn store(message: impl Into<String>) -> Self {
        DomainError::Store(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_displays_field() {
        let err = DomainError::validation("userEmail");
        assert_eq!(format!("{}", err), "Field 'userEmail' cannot be empty");
    }

    #[test]
    fn duplicate_email_displays_email() {
        let err = DomainError::duplicate_email("a@x.com");
        assert_eq!(
            format!("{}", err),
            "A user with email 'a@x.com' already exists"
        );
    }

    #[test]
    fn unknown_email_displays_email() {
        let err = DomainError::unknown_email("b@x.com");
        assert_eq!(format!("{}", err), "No user found for email 'b@x.com'");
    }

    #[test]
    fn store_fault_displays_message() {
        let err = DomainError::store("connection refused");
        assert_eq!(format!("{}", err), "Storage failure: connection refused");
    }
}
