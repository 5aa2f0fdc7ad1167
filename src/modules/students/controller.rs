use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::pagination::Paged;
use crate::validator::{ValidatedJson, ValidatedQuery};

use super::model::{CreateStudentRequest, StudentListQuery, StudentResponse};
use super::service::StudentService;

/// Paginated, searchable view of the caller's own roster.
#[instrument(skip(state))]
pub async fn get_students(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedQuery(query): ValidatedQuery<StudentListQuery>,
) -> Result<Json<Paged<StudentResponse>>, AppError> {
    let teacher_id = auth_user.teacher_id()?;
    let page = StudentService::list_students(&state.db, teacher_id, query).await?;
    Ok(Json(page))
}

/// Fetch a single student by id. Requires a valid token but is not scoped
/// to the caller's roster.
#[instrument(skip(state))]
pub async fn get_student(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<StudentResponse>, AppError> {
    let student = StudentService::get_student(&state.db, id).await?;
    Ok(Json(student))
}

/// Add a student to the caller's roster.
#[instrument(skip(state, dto))]
pub async fn create_student(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateStudentRequest>,
) -> Result<(StatusCode, Json<StudentResponse>), AppError> {
    let teacher_id = auth_user.teacher_id()?;
    let student = StudentService::create_student(&state.db, teacher_id, dto).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

/// Remove a student from the caller's roster.
#[instrument(skip(state))]
pub async fn delete_student(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let teacher_id = auth_user.teacher_id()?;
    StudentService::delete_student(&state.db, teacher_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
