// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Aggregate views derived from a set of workouts.
//!
//! These are computed on demand by `services::insights` and never stored.

use chrono::NaiveDate;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Totals over completed workouts.
///
/// Serialized as `{ count, totalMinutes, totalCalories }`, the shape the chat
/// integration reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WeekStats {
    pub count: u32,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub total_minutes: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub total_calories: u64,
}

/// Workout count per activity type, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeDistribution {
    entries: Vec<(String, u32)>,
    index: HashMap<String, usize>,
}

impl TypeDistribution {
    /// Count one more workout of `activity_type`.
    pub fn record(&mut self, activity_type: &str) {
        match self.index.get(activity_type) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index
                    .insert(activity_type.to_string(), self.entries.len());
                self.entries.push((activity_type.to_string(), 1));
            }
        }
    }

    pub fn get(&self, activity_type: &str) -> Option<u32> {
        self.index.get(activity_type).map(|&i| self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(activity_type, count)` in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(t, c)| (t.as_str(), *c))
    }

    /// The type with the highest count. Ties go to the type seen first.
    pub fn most_common(&self) -> Option<(&str, u32)> {
        self.iter().fold(None, |best, (t, c)| match best {
            Some((_, best_count)) if best_count >= c => best,
            _ => Some((t, c)),
        })
    }
}

impl Serialize for TypeDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (activity_type, count) in &self.entries {
            map.serialize_entry(activity_type, count)?;
        }
        map.end()
    }
}

/// Best efforts over a set of workouts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PersonalRecords {
    /// Longest single workout (minutes)
    pub longest_duration: u32,
    /// Most calories in a single workout
    pub most_calories: u32,
    /// Most frequent activity type
    pub favorite_type: String,
}

/// One day of the week calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CalendarDay {
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub date: NaiveDate,
    /// Short weekday name ("Sun".."Sat")
    pub day: String,
    pub workouts: u32,
    pub minutes: u32,
}

/// Distribution row with a display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DistributionEntry {
    pub activity_type: String,
    pub label: String,
    pub count: u32,
}

/// Everything the insights page shows for one week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WeeklyInsights {
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub week_start: NaiveDate,
    pub stats: WeekStats,
    /// Workout count keyed by activity type
    #[cfg_attr(feature = "binding-generation", ts(type = "Record<string, number>"))]
    pub types: TypeDistribution,
    pub distribution: Vec<DistributionEntry>,
    /// Minutes per day, Sunday first
    pub daily_minutes: [u32; 7],
    pub calendar: Vec<CalendarDay>,
    /// `None` when there are no workouts this week
    pub records: Option<PersonalRecords>,
}
