// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! PolyPulse: lightweight workout tracking with weekly insights
//!
//! This crate stores logged workouts in a local storage slot and derives
//! weekly statistics, type distribution, a daily activity series and
//! personal records from them. A small JSON API exposes both to a UI and to
//! chat/reporting integrations.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::WorkoutStore;
use std::sync::{Mutex, MutexGuard};
use time_utils::Clock;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: Mutex<WorkoutStore>,
    pub clock: Box<dyn Clock>,
}

impl AppState {
    pub fn new(config: Config, store: WorkoutStore, clock: Box<dyn Clock>) -> Self {
        Self {
            config,
            store: Mutex::new(store),
            clock,
        }
    }

    /// Lock the store for one read-modify-write cycle.
    ///
    /// Never hold the guard across an `.await`.
    pub fn store(&self) -> MutexGuard<'_, WorkoutStore> {
        // The store keeps no in-memory state, so a poisoned lock is safe to reuse
        self.store
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
