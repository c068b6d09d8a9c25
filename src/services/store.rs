// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout store: the canonical workout collection.
//!
//! Every operation reads the whole collection from the storage slot, and
//! every mutation writes the whole collection back before returning. There
//! is no cache. Read-only views treat an unreadable slot as empty; mutations
//! fail instead, so a bad read is never written back over stored data.

use crate::db::{StorageError, StorageSlot};
use crate::models::{NewWorkout, Workout, WorkoutUpdate};
use crate::time_utils::{format_utc_rfc3339, in_week, week_start};
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

/// Owns the workout collection stored in one slot.
pub struct WorkoutStore {
    slot: Box<dyn StorageSlot>,
}

impl WorkoutStore {
    pub fn new(slot: Box<dyn StorageSlot>) -> Self {
        Self { slot }
    }

    /// All workouts in insertion order.
    ///
    /// An unreadable or corrupt slot is logged and treated as empty.
    pub fn list(&self) -> Vec<Workout> {
        self.try_list().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Workout storage unreadable, treating as empty");
            Vec::new()
        })
    }

    /// All workouts, surfacing storage failures.
    pub fn try_list(&self) -> Result<Vec<Workout>, StorageError> {
        match self.slot.read()? {
            None => Ok(Vec::new()),
            Some(raw) if raw.trim().is_empty() => Ok(Vec::new()),
            Some(raw) => {
                serde_json::from_str(&raw).map_err(|e| StorageError::Corrupt(e.to_string()))
            }
        }
    }

    /// Look up one workout.
    pub fn get(&self, id: &str) -> Option<Workout> {
        self.list().into_iter().find(|w| w.id == id)
    }

    /// Store a new workout, assigning its id and creation time.
    pub fn add(
        &mut self,
        new: NewWorkout,
        now: DateTime<FixedOffset>,
    ) -> Result<Workout, StorageError> {
        let mut workouts = self.try_list()?;
        let now_utc = now.with_timezone(&Utc);

        let workout = Workout {
            id: next_id(&workouts, now_utc),
            name: new.name,
            date: new.date,
            time: new.time,
            duration_minutes: new.duration_minutes,
            calories: new.calories,
            activity_type: new.activity_type,
            notes: new.notes,
            created_at: format_utc_rfc3339(now_utc),
        };

        workouts.push(workout.clone());
        self.save(&workouts)?;

        tracing::info!(
            id = %workout.id,
            activity_type = %workout.activity_type,
            date = ?workout.date,
            "Workout added"
        );
        Ok(workout)
    }

    /// Merge `changes` into the workout with `id`.
    ///
    /// Returns `Ok(None)` without writing if there is no such workout.
    pub fn update(
        &mut self,
        id: &str,
        changes: WorkoutUpdate,
    ) -> Result<Option<Workout>, StorageError> {
        let mut workouts = self.try_list()?;

        let Some(workout) = workouts.iter_mut().find(|w| w.id == id) else {
            tracing::debug!(id, "Update for unknown workout ignored");
            return Ok(None);
        };
        workout.apply(changes);
        let updated = workout.clone();

        self.save(&workouts)?;
        tracing::info!(id, "Workout updated");
        Ok(Some(updated))
    }

    /// Remove the workout with `id`. Unknown ids are a no-op.
    pub fn delete(&mut self, id: &str) -> Result<(), StorageError> {
        let mut workouts = self.try_list()?;
        let before = workouts.len();
        workouts.retain(|w| w.id != id);

        if workouts.len() == before {
            tracing::debug!(id, "Delete for unknown workout ignored");
            return Ok(());
        }

        self.save(&workouts)?;
        tracing::info!(id, "Workout deleted");
        Ok(())
    }

    /// Remove every workout.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.save(&[])?;
        tracing::info!("All workouts cleared");
        Ok(())
    }

    /// Workouts dated within the Sunday-to-Saturday week containing `today`.
    pub fn current_week_records(&self, today: NaiveDate) -> Vec<Workout> {
        let start = week_start(today);
        self.list()
            .into_iter()
            .filter(|w| w.date.is_some_and(|d| in_week(d, start)))
            .collect()
    }

    fn save(&self, workouts: &[Workout]) -> Result<(), StorageError> {
        let json = serde_json::to_string(workouts)
            .map_err(|e| StorageError::Unavailable(format!("Failed to serialize workouts: {}", e)))?;
        self.slot.write(&json)
    }
}

/// Millisecond timestamp id, bumped until it is unused.
fn next_id(existing: &[Workout], now: DateTime<Utc>) -> String {
    let mut candidate = now.timestamp_millis();
    while existing.iter().any(|w| w.id == candidate.to_string()) {
        candidate += 1;
    }
    candidate.to_string()
}
