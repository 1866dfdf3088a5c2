use crate::errors::AppError;
use crate::forms::{HealthDraft, WeightDraft, WorkoutDraft};
use crate::metrics::sort_by_date;
use crate::models::{DashboardState, HealthEntry, WeightEntry, WorkoutEntry};
use crate::state::AppState;
use crate::stats::{DashboardSummary, build_summary};
use crate::storage::persist_state;
use crate::ui::render_dashboard;
use axum::{Json, extract::State, http::StatusCode, response::Html};
use chrono::{Local, NaiveDate};
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    Html(render_dashboard(&build_summary(&data)))
}

pub async fn get_state(State(state): State<AppState>) -> Result<Json<DashboardState>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(DashboardState {
        health: sort_by_date(&data.health),
        workouts: sort_by_date(&data.workouts),
        weight: sort_by_date(&data.weight),
    }))
}

pub async fn get_summary(
    State(state): State<AppState>,
) -> Result<Json<DashboardSummary>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(build_summary(&data)))
}

pub async fn add_health(
    State(state): State<AppState>,
    Json(draft): Json<HealthDraft>,
) -> Result<(StatusCode, Json<HealthEntry>), AppError> {
    let entry = draft.into_entry(today(), state.ids.as_ref())?;

    let mut data = state.data.lock().await;
    data.health.push(entry.clone());
    let sorted = sort_by_date(&data.health);
    data.health = sorted;
    // The in-memory copy stays authoritative when the write fails.
    persist_state(&state.store, &data).await;

    info!(kind = "health", id = %entry.id, date = %entry.date, "recorded check-in");
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn add_workout(
    State(state): State<AppState>,
    Json(draft): Json<WorkoutDraft>,
) -> Result<(StatusCode, Json<WorkoutEntry>), AppError> {
    let entry = draft.into_entry(today(), state.ids.as_ref())?;

    let mut data = state.data.lock().await;
    data.workouts.push(entry.clone());
    let sorted = sort_by_date(&data.workouts);
    data.workouts = sorted;
    // The in-memory copy stays authoritative when the write fails.
    persist_state(&state.store, &data).await;

    info!(kind = "workout", id = %entry.id, date = %entry.date, "recorded workout");
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn add_weight(
    State(state): State<AppState>,
    Json(draft): Json<WeightDraft>,
) -> Result<(StatusCode, Json<WeightEntry>), AppError> {
    let entry = draft.into_entry(today(), state.ids.as_ref())?;

    let mut data = state.data.lock().await;
    data.weight.push(entry.clone());
    let sorted = sort_by_date(&data.weight);
    data.weight = sorted;
    // The in-memory copy stays authoritative when the write fails.
    persist_state(&state.store, &data).await;

    info!(kind = "weight", id = %entry.id, date = %entry.date, "recorded weight");
    Ok((StatusCode::CREATED, Json(entry)))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
