use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::students::model::{CreateStudentRequest, StudentListQuery, StudentResponse};
use crate::utils::errors::AppError;
use crate::utils::pagination::Paged;

/// Escape LIKE wildcards so a search term always matches literally.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

pub struct StudentService;

impl StudentService {
    /// One page of the caller's roster. The total is counted over the
    /// filtered set before paging, so every page reports the same
    /// `total_count`; ordering is first name ascending with insertion order
    /// breaking ties.
    #[instrument(skip(db))]
    pub async fn list_students(
        db: &PgPool,
        teacher_id: Uuid,
        query: StudentListQuery,
    ) -> Result<Paged<StudentResponse>, AppError> {
        let page_number = query.page.page_number();
        let page_size = query.page.page_size();
        let pattern = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(like_pattern);

        let total_count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM students s
            WHERE s.teacher_id = $1
              AND ($2::text IS NULL
                   OR s.first_name ILIKE $2
                   OR s.last_name ILIKE $2
                   OR s.email ILIKE $2)
            "#,
        )
        .bind(teacher_id)
        .bind(pattern.as_deref())
        .fetch_one(db)
        .await?;

        let items = sqlx::query_as::<_, StudentResponse>(
            r#"
            SELECT s.id, s.first_name, s.last_name, s.email,
                   s.first_name || ' ' || s.last_name AS full_name,
                   s.created_at, s.teacher_id,
                   t.first_name || ' ' || t.last_name AS teacher_name
            FROM students s
            JOIN teachers t ON t.id = s.teacher_id
            WHERE s.teacher_id = $1
              AND ($2::text IS NULL
                   OR s.first_name ILIKE $2
                   OR s.last_name ILIKE $2
                   OR s.email ILIKE $2)
            ORDER BY s.first_name ASC, s.id ASC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(teacher_id)
        .bind(pattern.as_deref())
        .bind(page_size)
        .bind(query.page.offset())
        .fetch_all(db)
        .await?;

        Ok(Paged::new(items, total_count, page_number, page_size))
    }

    /// Fetch one student by id, whoever owns it.
    // TODO: reads are not owner-scoped while deletes are; decide with
    // product whether lookups by id should 404 for other teachers' students.
    #[instrument(skip(db))]
    pub async fn get_student(db: &PgPool, student_id: i32) -> Result<StudentResponse, AppError> {
        let student = sqlx::query_as::<_, StudentResponse>(
            r#"
            SELECT s.id, s.first_name, s.last_name, s.email,
                   s.first_name || ' ' || s.last_name AS full_name,
                   s.created_at, s.teacher_id,
                   t.first_name || ' ' || t.last_name AS teacher_name
            FROM students s
            JOIN teachers t ON t.id = s.teacher_id
            WHERE s.id = $1
            "#,
        )
        .bind(student_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found("Student not found"))?;

        Ok(student)
    }

    /// Creates a student owned by the caller. The owner id comes from the
    /// authenticated identity, never from the request body.
    #[instrument(skip(db, dto))]
    pub async fn create_student(
        db: &PgPool,
        teacher_id: Uuid,
        dto: CreateStudentRequest,
    ) -> Result<StudentResponse, AppError> {
        let student_id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO students (first_name, last_name, email, teacher_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&dto.email)
        .bind(teacher_id)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::validation(
                        "A student with this email already exists",
                    );
                }
            }
            e.into()
        })?;

        Self::get_student(db, student_id).await
    }

    /// Deletes a student, but only for its owner. A missing record and a
    /// record owned by someone else are indistinguishable to the caller.
    #[instrument(skip(db))]
    pub async fn delete_student(
        db: &PgPool,
        teacher_id: Uuid,
        student_id: i32,
    ) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1 AND teacher_id = $2")
            .bind(student_id)
            .bind(teacher_id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Student not found"));
        }

        Ok(())
    }
}
