//! HTTP DTOs for user endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::NewUser;

/// Request body for POST /api/create-user.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub lastname: Option<String>,
    #[serde(default)]
    pub job: Option<String>,
    #[serde(default)]
    pub room_number: Option<String>,
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            email: req.email.unwrap_or_default(),
            firstname: req.firstname.unwrap_or_default(),
            lastname: req.lastname.unwrap_or_default(),
            job: req.job,
            room_number: req.room_number,
        }
    }
}

/// Request body for POST /api/login. A bare email lookup, not a
/// credential check.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
}

/// Response for a created user.
#[derive(Debug, Clone, Serialize)]
pub struct CreateUserResponse {
    pub id: i64,
}
