use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/state", get(handlers::get_state))
        .route("/api/summary", get(handlers::get_summary))
        .route("/api/health", post(handlers::add_health))
        .route("/api/workouts", post(handlers::add_workout))
        .route("/api/weight", post(handlers::add_weight))
        .with_state(state)
}
