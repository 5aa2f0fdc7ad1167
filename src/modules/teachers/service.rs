use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::teachers::model::TeacherProfile;
use crate::utils::errors::AppError;

pub struct TeacherService;

impl TeacherService {
    /// Every registered teacher, ordered by first name, each annotated with
    /// the live count of owned students. The aggregate runs at read time so
    /// a teacher with an empty roster reports 0 rather than a stale or
    /// missing value.
    #[instrument(skip(db))]
    pub async fn get_all_teachers(db: &PgPool) -> Result<Vec<TeacherProfile>, AppError> {
        let teachers = sqlx::query_as::<_, TeacherProfile>(
            r#"
            SELECT t.id, t.user_name, t.email, t.first_name, t.last_name,
                   t.first_name || ' ' || t.last_name AS full_name,
                   t.created_at, t.last_login_at,
                   COUNT(s.id) AS student_count
            FROM teachers t
            LEFT JOIN students s ON s.teacher_id = t.id
            GROUP BY t.id
            ORDER BY t.first_name ASC
            "#,
        )
        .fetch_all(db)
        .await?;

        Ok(teachers)
    }

    /// Single-teacher profile with the same live student count. Backs
    /// `/teachers/me` and the profile payloads of register and login.
    #[instrument(skip(db))]
    pub async fn get_teacher(db: &PgPool, id: Uuid) -> Result<TeacherProfile, AppError> {
        let teacher = sqlx::query_as::<_, TeacherProfile>(
            r#"
            SELECT t.id, t.user_name, t.email, t.first_name, t.last_name,
                   t.first_name || ' ' || t.last_name AS full_name,
                   t.created_at, t.last_login_at,
                   COUNT(s.id) AS student_count
            FROM teachers t
            LEFT JOIN students s ON s.teacher_id = t.id
            WHERE t.id = $1
            GROUP BY t.id
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found("Teacher not found"))?;

        Ok(teacher)
    }
}
