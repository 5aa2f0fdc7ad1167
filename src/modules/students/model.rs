use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::utils::pagination::PageParams;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    #[validate(length(
        min = 1,
        max = 50,
        message = "First name must be between 1 and 50 characters"
    ))]
    pub first_name: String,
    #[validate(length(
        min = 1,
        max = 50,
        message = "Last name must be between 1 and 50 characters"
    ))]
    pub last_name: String,
    #[validate(
        email(message = "Email must be a valid email address"),
        length(max = 100, message = "Email must be at most 100 characters")
    )]
    pub email: String,
}

/// Query parameters for the roster listing. `search` matches first name,
/// last name, or email as a case-insensitive substring.
#[derive(Debug, Deserialize, Default)]
pub struct StudentListQuery {
    #[serde(flatten)]
    pub page: PageParams,
    pub search: Option<String>,
}

/// Wire shape of a student. `full_name` and `teacher_name` come from the
/// producing query (the owner is joined explicitly, never lazily loaded).
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct StudentResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
    pub teacher_id: Uuid,
    pub teacher_name: String,
}
