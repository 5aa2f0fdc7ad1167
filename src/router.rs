use std::sync::Arc;

use crate::logging::request_logger;
use crate::modules::auth::router::init_auth_router;
use crate::modules::students::router::init_students_router;
use crate::modules::teachers::router::init_teachers_router;
use crate::state::AppState;
use axum::{Router, middleware};
use tower_governor::GovernorLayer;

pub fn init_router(state: AppState) -> Router {
    let auth_governor = state.rate_limit_config.auth_governor_config();

    Router::new()
        .nest(
            "/auth",
            init_auth_router().layer(GovernorLayer::new(Arc::new(auth_governor))),
        )
        .nest("/teachers", init_teachers_router())
        .nest("/students", init_students_router())
        .with_state(state)
        .layer(middleware::from_fn(request_logger))
}
