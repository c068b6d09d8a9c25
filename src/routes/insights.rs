// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weekly statistics and insights routes.
//!
//! `/api/stats/current` is the hook chat/reporting integrations poll; its
//! body is exactly `{ count, totalMinutes, totalCalories }`.

use crate::models::{WeekStats, WeeklyInsights};
use crate::services::insights::{calculate_stats, weekly_insights};
use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/stats/current", get(current_stats))
        .route("/api/insights", get(insights))
}

/// Completed-workout totals for the current week.
async fn current_stats(State(state): State<Arc<AppState>>) -> Json<WeekStats> {
    let now = state.clock.now().naive_local();
    let workouts = state.store().current_week_records(now.date());

    let stats = calculate_stats(&workouts, now);
    tracing::debug!(
        count = stats.count,
        total_minutes = stats.total_minutes,
        total_calories = stats.total_calories,
        "Computed current stats"
    );
    Json(stats)
}

/// Everything the insights page renders for the current week.
async fn insights(State(state): State<Arc<AppState>>) -> Json<WeeklyInsights> {
    let now = state.clock.now().naive_local();
    let workouts = state.store().current_week_records(now.date());
    Json(weekly_insights(&workouts, now))
}
