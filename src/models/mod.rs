// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod stats;
pub mod workout;

pub use stats::{
    CalendarDay, DistributionEntry, PersonalRecords, TypeDistribution, WeekStats, WeeklyInsights,
};
pub use workout::{NewWorkout, Workout, WorkoutUpdate};
