use axum::Json;
use axum::extract::State;
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::TeacherProfile;
use super::service::TeacherService;

/// List every teacher with their current student count.
#[instrument(skip(state))]
pub async fn get_teachers(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Result<Json<Vec<TeacherProfile>>, AppError> {
    let teachers = TeacherService::get_all_teachers(&state.db).await?;
    Ok(Json(teachers))
}

/// The authenticated teacher's own profile.
#[instrument(skip(state))]
pub async fn get_current_teacher(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<TeacherProfile>, AppError> {
    let teacher_id = auth_user.teacher_id()?;
    let teacher = TeacherService::get_teacher(&state.db, teacher_id).await?;
    Ok(Json(teacher))
}
