//! Employee model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Employee record as stored and returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Store-assigned identifier, immutable after creation
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    #[validate(length(min = 1, message = "firstName must not be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "lastName must not be empty"))]
    pub last_name: String,
    #[validate(length(min = 1, message = "email must not be empty"))]
    pub email: String,
}

/// Update employee payload — absent fields keep their saved values
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    #[validate(length(min = 1, message = "firstName must not be empty"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, message = "lastName must not be empty"))]
    pub last_name: Option<String>,
    #[validate(length(min = 1, message = "email must not be empty"))]
    pub email: Option<String>,
}
