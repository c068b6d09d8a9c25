// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout CRUD routes.

use crate::error::{AppError, Result};
use crate::models::{NewWorkout, Workout, WorkoutUpdate};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/workouts",
            get(list_workouts).post(create_workout).delete(clear_workouts),
        )
        .route("/api/workouts/week", get(week_workouts))
        .route(
            "/api/workouts/{id}",
            get(get_workout).put(update_workout).delete(delete_workout),
        )
}

/// All workouts, insertion order.
async fn list_workouts(State(state): State<Arc<AppState>>) -> Json<Vec<Workout>> {
    Json(state.store().list())
}

/// Workouts dated in the current Sunday-to-Saturday week.
async fn week_workouts(State(state): State<Arc<AppState>>) -> Json<Vec<Workout>> {
    let today = state.clock.now().date_naive();
    Json(state.store().current_week_records(today))
}

async fn get_workout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Workout>> {
    state
        .store()
        .get(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Workout {} not found", id)))
}

/// Log a new workout.
async fn create_workout(
    State(state): State<Arc<AppState>>,
    Json(new): Json<NewWorkout>,
) -> Result<(StatusCode, Json<Workout>)> {
    new.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let now = state.clock.now();
    let workout = state.store().add(new, now)?;
    Ok((StatusCode::CREATED, Json(workout)))
}

/// Partially update a workout.
async fn update_workout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(changes): Json<WorkoutUpdate>,
) -> Result<Json<Workout>> {
    if changes.name.as_deref() == Some("") || changes.activity_type.as_deref() == Some("") {
        return Err(AppError::BadRequest(
            "name and type cannot be empty".to_string(),
        ));
    }

    state
        .store()
        .update(&id, changes)?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Workout {} not found", id)))
}

/// Delete a workout. Unknown ids succeed too.
async fn delete_workout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state.store().delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete every workout.
async fn clear_workouts(State(state): State<Arc<AppState>>) -> Result<StatusCode> {
    tracing::warn!("Clearing all workouts");
    state.store().clear()?;
    Ok(StatusCode::NO_CONTENT)
}
