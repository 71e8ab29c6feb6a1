//! User roster records.

use serde::{Deserialize, Serialize};

use super::DomainError;

/// Input for creating a roster entry. Email must be globally unique;
/// uniqueness is enforced by the store's constraint, not pre-checked here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    pub job: Option<String>,
    pub room_number: Option<String>,
}

impl NewUser {
    /// Checks that the required fields are present and non-empty.
    /// `job` and `room_number` are optional.
    ///
    /// # Errors
    ///
    /// Returns `Validation` naming the first empty required field.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.email.trim().is_empty() {
            return Err(DomainError::validation("email"));
        }
        if self.firstname.trim().is_empty() {
            return Err(DomainError::validation("firstname"));
        }
        if self.lastname.trim().is_empty() {
            return Err(DomainError::validation("lastname"));
        }
        Ok(())
    }
}

/// A persisted roster entry. Read-only once created; the API exposes no
/// update or delete for users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user() -> NewUser {
        NewUser {
            email: "a@x.com".to_string(),
            firstname: "Alice".to_string(),
            lastname: "Martin".to_string(),
            job: None,
            room_number: None,
        }
    }

    #[test]
    fn complete_user_validates() {
        assert!(new_user().validate().is_ok());
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let mut u = new_user();
        u.job = Some("cook".to_string());
        u.room_number = None;
        assert!(u.validate().is_ok());
    }

    #[test]
    fn empty_email_is_rejected() {
        let mut u = new_user();
        u.email = String::new();
        assert_eq!(u.validate(), Err(DomainError::Validation { field: "email" }));
    }

    #[test]
    fn empty_lastname_is_rejected() {
        let mut u = new_user();
        u.lastname = " ".to_string();
        assert_eq!(
            u.validate(),
            Err(DomainError::Validation { field: "lastname" })
        );
    }

    #[test]
    fn record_omits_absent_optionals_in_json() {
        let record = UserRecord {
            id: 1,
            email: "a@x.com".to_string(),
            firstname: "Alice".to_string(),
            lastname: "Martin".to_string(),
            job: None,
            room_number: Some("12".to_string()),
        };
        let json = serde_json::to_value(record).unwrap();
        assert!(json.get("job").is_none());
        assert_eq!(json["roomNumber"], "12");
    }
}
