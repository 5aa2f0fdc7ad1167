use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{get_current_teacher, get_teachers};

pub fn init_teachers_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_teachers))
        .route("/me", get(get_current_teacher))
}
