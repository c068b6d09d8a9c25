// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Insights engine: aggregates over a set of workouts.
//!
//! Everything here is a pure function of its inputs. `now` is local
//! wall-clock time; pass it in rather than reading the clock.

use crate::models::{
    CalendarDay, DistributionEntry, PersonalRecords, TypeDistribution, WeekStats, WeeklyInsights,
    Workout,
};
use crate::time_utils::{week_days, week_start, WEEKDAY_LABELS};
use chrono::{NaiveDate, NaiveDateTime};

/// Whether a workout has already happened.
///
/// Needs both a date and a time; the combined moment must be strictly
/// before `now`.
pub fn is_completed(workout: &Workout, now: NaiveDateTime) -> bool {
    match (workout.date, workout.time) {
        (Some(date), Some(time)) => date.and_time(time) < now,
        _ => false,
    }
}

/// Count and totals over completed workouts only.
pub fn calculate_stats(workouts: &[Workout], now: NaiveDateTime) -> WeekStats {
    workouts
        .iter()
        .filter(|w| is_completed(w, now))
        .fold(WeekStats::default(), |mut stats, w| {
            stats.count += 1;
            stats.total_minutes += u64::from(w.duration_minutes);
            stats.total_calories += u64::from(w.calories);
            stats
        })
}

/// Workout count per activity type over all workouts.
pub fn type_distribution(workouts: &[Workout]) -> TypeDistribution {
    let mut dist = TypeDistribution::default();
    for w in workouts {
        dist.record(&w.activity_type);
    }
    dist
}

/// Minutes per day for the week containing `today`, Sunday first.
///
/// Scheduled (future) workouts count too.
pub fn daily_series(workouts: &[Workout], today: NaiveDate) -> [u32; 7] {
    let mut minutes = [0u32; 7];
    for (slot, day) in minutes.iter_mut().zip(week_days(today)) {
        *slot = workouts
            .iter()
            .filter(|w| w.date == Some(day))
            .fold(0u32, |sum, w| sum.saturating_add(w.duration_minutes));
    }
    minutes
}

/// Longest workout, most calories and favorite type over all workouts.
///
/// Returns `None` when there is nothing to compare.
pub fn personal_records(workouts: &[Workout]) -> Option<PersonalRecords> {
    let longest_duration = workouts.iter().map(|w| w.duration_minutes).max()?;
    let most_calories = workouts.iter().map(|w| w.calories).max()?;
    let dist = type_distribution(workouts);
    let (favorite_type, _) = dist.most_common()?;

    Some(PersonalRecords {
        longest_duration,
        most_calories,
        favorite_type: favorite_type.to_string(),
    })
}

/// Per-day workout counts and minutes for the week containing `today`.
pub fn week_calendar(workouts: &[Workout], today: NaiveDate) -> Vec<CalendarDay> {
    week_days(today)
        .zip(WEEKDAY_LABELS)
        .map(|(date, label)| {
            let on_day = workouts.iter().filter(|w| w.date == Some(date));
            let (count, minutes) = on_day.fold((0u32, 0u32), |(count, minutes), w| {
                (count + 1, minutes.saturating_add(w.duration_minutes))
            });
            CalendarDay {
                date,
                day: label.to_string(),
                workouts: count,
                minutes,
            }
        })
        .collect()
}

/// Capitalize the first character for display. Keys are never rewritten.
pub fn display_label(activity_type: &str) -> String {
    let mut chars = activity_type.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// All insights for the week containing `now`.
pub fn weekly_insights(workouts: &[Workout], now: NaiveDateTime) -> WeeklyInsights {
    let today = now.date();
    let types = type_distribution(workouts);
    let distribution = types
        .iter()
        .map(|(activity_type, count)| DistributionEntry {
            activity_type: activity_type.to_string(),
            label: display_label(activity_type),
            count,
        })
        .collect();

    WeeklyInsights {
        week_start: week_start(today),
        stats: calculate_stats(workouts, now),
        types,
        distribution,
        daily_minutes: daily_series(workouts, today),
        calendar: week_calendar(workouts, today),
        records: personal_records(workouts),
    }
}
