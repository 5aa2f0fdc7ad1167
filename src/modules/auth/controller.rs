use axum::Json;
use axum::extract::State;
use tracing::instrument;

use crate::modules::teachers::model::TeacherProfile;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{AuthResponse, LoginRequest, RegisterRequest};
use super::service::AuthService;

/// Register a new teacher account.
#[instrument(skip(state, dto))]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterRequest>,
) -> Result<Json<TeacherProfile>, AppError> {
    let profile = AuthService::register(&state.db, dto).await?;
    Ok(Json(profile))
}

/// Log in and receive an access token plus the caller's profile.
#[instrument(skip(state, dto))]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let response = AuthService::login(&state.db, dto, &state.jwt_config).await?;
    Ok(Json(response))
}
