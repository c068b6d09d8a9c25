// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! PolyPulse API Server
//!
//! Serves the workout store and weekly insights over a local JSON API.

use anyhow::Context;
use polypulse::{
    config::Config,
    db::{slots, FileSlot},
    services::WorkoutStore,
    time_utils::SystemClock,
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(port = config.port, "Starting PolyPulse API");

    // Open the workout storage slot
    let slot = FileSlot::open(&config.data_dir, slots::WORKOUTS)
        .context("Failed to open workout storage")?;
    let store = WorkoutStore::new(Box::new(slot));

    match store.try_list() {
        Ok(workouts) => tracing::info!(count = workouts.len(), "Workouts loaded"),
        Err(e) => tracing::warn!(error = %e, "Workout storage unreadable; starting empty"),
    }

    // Build shared state
    let state = Arc::new(AppState::new(config.clone(), store, Box::new(SystemClock)));

    // Build router
    let app = polypulse::routes::create_router(state);

    // Start server
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> anyhow::Result<()> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("polypulse=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
