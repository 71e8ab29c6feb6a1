//! HTTP DTOs for meal endpoints.
//!
//! Required fields are modelled as defaulted options so a missing key
//! reaches domain validation (and a 400) instead of a deserialize error.

use serde::{Deserialize, Serialize};

use crate::domain::MealRecord;

/// Request body for POST /api/save-meal.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveMealRequest {
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub meal_type: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

impl From<SaveMealRequest> for MealRecord {
    fn from(req: SaveMealRequest) -> Self {
        Self {
            user_email: req.user_email.unwrap_or_default(),
            date: req.date.unwrap_or_default(),
            meal_type: req.meal_type.unwrap_or_default(),
            state: req.state.unwrap_or_default(),
        }
    }
}

/// Query parameters for GET /api/get-meals.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealsQuery {
    #[serde(default)]
    pub user_email: Option<String>,
}

/// Acknowledgement for a saved meal. The id is informational only; on the
/// update path it refers to the pre-existing row.
#[derive(Debug, Clone, Serialize)]
pub struct SaveMealResponse {
    pub message: String,
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_meal_request_deserializes() {
        let json = r#"{"userEmail":"a@x.com","date":"2024-01-01","mealType":"lunch","state":"present"}"#;
        let req: SaveMealRequest = serde_json::from_str(json).unwrap();
        let record: MealRecord = req.into();
        assert_eq!(record.user_email, "a@x.com");
        assert_eq!(record.meal_type, "lunch");
    }

    #[test]
    fn missing_key_becomes_empty_field() {
        let json = r#"{"userEmail":"a@x.com","date":"2024-01-01","state":"present"}"#;
        let req: SaveMealRequest = serde_json::from_str(json).unwrap();
        let record: MealRecord = req.into();
        assert!(record.meal_type.is_empty());
        assert!(record.validate().is_err());
    }

    #[test]
    fn meals_query_tolerates_absent_param() {
        let query: MealsQuery = serde_json::from_str("{}").unwrap();
        assert!(query.user_email.is_none());
    }
}
