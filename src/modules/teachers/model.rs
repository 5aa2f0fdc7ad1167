use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Public view of a teacher. The password hash never leaves the store;
/// `full_name` and `student_count` are computed by the query that produces
/// the row, so the count is always live.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TeacherProfile {
    pub id: Uuid,
    pub user_name: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
    pub student_count: i64,
}
