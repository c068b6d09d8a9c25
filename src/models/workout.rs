// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout record model for storage and API.
//!
//! The JSON keys (`duration`, `type`, `createdAt`, ...) match the layout the
//! browser app wrote to local storage, so existing exports load unchanged.
//! Fields other than `id` are parsed leniently: anything unparseable becomes
//! zero, empty or absent instead of failing the whole collection.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// Stored workout record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Workout {
    /// Opaque identifier, assigned at creation
    pub id: String,
    /// Workout name/title
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    /// Calendar date (no timezone)
    #[serde(default, deserialize_with = "lenient_date")]
    #[cfg_attr(feature = "binding-generation", ts(type = "string | null"))]
    pub date: Option<NaiveDate>,
    /// Local time of day
    #[serde(
        default,
        deserialize_with = "lenient_time",
        serialize_with = "serialize_time"
    )]
    #[cfg_attr(feature = "binding-generation", ts(type = "string | null"))]
    pub time: Option<NaiveTime>,
    /// Duration in minutes
    #[serde(rename = "duration", default, deserialize_with = "lenient_count")]
    pub duration_minutes: u32,
    /// Calories burned
    #[serde(default, deserialize_with = "lenient_count")]
    pub calories: u32,
    /// Free-text activity category ("run", "yoga", ...)
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub activity_type: String,
    #[serde(
        default,
        deserialize_with = "stored_notes",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<String>,
    /// When this record was created (RFC3339, UTC)
    #[serde(default, deserialize_with = "lenient_string")]
    pub created_at: String,
}

impl Workout {
    /// Merge the supplied fields of `changes` into this record.
    ///
    /// `id` and `created_at` are never touched.
    pub fn apply(&mut self, changes: WorkoutUpdate) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(date) = changes.date {
            self.date = Some(date);
        }
        if let Some(time) = changes.time {
            self.time = time;
        }
        if let Some(duration) = changes.duration_minutes {
            self.duration_minutes = duration;
        }
        if let Some(calories) = changes.calories {
            self.calories = calories;
        }
        if let Some(activity_type) = changes.activity_type {
            self.activity_type = activity_type;
        }
        if let Some(notes) = changes.notes {
            self.notes = notes;
        }
    }
}

/// Fields supplied when logging a new workout.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkout {
    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_date")]
    #[validate(required(message = "date is required"))]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_time")]
    pub time: Option<NaiveTime>,
    #[serde(rename = "duration", default, deserialize_with = "lenient_count")]
    pub duration_minutes: u32,
    #[serde(default, deserialize_with = "lenient_count")]
    pub calories: u32,
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    #[validate(length(min = 1, message = "type is required"))]
    pub activity_type: String,
    #[serde(default, deserialize_with = "lenient_notes")]
    pub notes: Option<String>,
}

/// Partial update of a workout. Absent keys leave the field unchanged.
///
/// For `time` and `notes`, an explicit empty string or `null` clears the field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutUpdate {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "present_time")]
    pub time: Option<Option<NaiveTime>>,
    #[serde(rename = "duration", default, deserialize_with = "present_count")]
    pub duration_minutes: Option<u32>,
    #[serde(default, deserialize_with = "present_count")]
    pub calories: Option<u32>,
    #[serde(rename = "type")]
    pub activity_type: Option<String>,
    #[serde(default, deserialize_with = "present_notes")]
    pub notes: Option<Option<String>>,
}

// ─── Lenient parsing ─────────────────────────────────────────

/// Parse a free-form count the way a form field is read: leading integer
/// digits win, anything else is zero. Negative values clamp to zero.
pub fn parse_count(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];

    if negative || digits.is_empty() {
        return 0;
    }
    // All-digit strings only fail to parse on overflow
    digits.parse().unwrap_or(u32::MAX)
}

fn count_from_value(value: Option<Value>) -> u32 {
    match value {
        Some(Value::Number(n)) => {
            if let Some(v) = n.as_u64() {
                u32::try_from(v).unwrap_or(u32::MAX)
            } else {
                // Negative integers and floats: truncate, clamp at zero
                n.as_f64()
                    .filter(|v| v.is_finite() && *v > 0.0)
                    .map(|v| v.min(u32::MAX as f64) as u32)
                    .unwrap_or(0)
            }
        }
        Some(Value::String(s)) => parse_count(&s),
        _ => 0,
    }
}

/// Parse a calendar date, accepting a full ISO date-time by its date prefix.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().or_else(|| {
        raw.get(..10)
            .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
    })
}

/// Parse a time of day in `HH:MM` or `HH:MM:SS` form.
pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Text field of a stored record; `null` or a non-string reads as empty.
fn lenient_string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::String(s)) => s,
        _ => String::new(),
    })
}

fn stored_notes<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

fn lenient_count<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    Ok(count_from_value(Option::<Value>::deserialize(d)?))
}

fn present_count<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u32>, D::Error> {
    Ok(Some(count_from_value(Option::<Value>::deserialize(d)?)))
}

fn lenient_date<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
    let value = Option::<Value>::deserialize(d)?;
    Ok(match value {
        Some(Value::String(s)) => parse_date(&s),
        _ => None,
    })
}

fn lenient_time<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveTime>, D::Error> {
    let value = Option::<Value>::deserialize(d)?;
    Ok(match value {
        Some(Value::String(s)) => parse_time(&s),
        _ => None,
    })
}

fn present_time<'de, D: Deserializer<'de>>(
    d: D,
) -> Result<Option<Option<NaiveTime>>, D::Error> {
    lenient_time(d).map(Some)
}

fn lenient_notes<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(non_empty(Option::<String>::deserialize(d)?))
}

fn present_notes<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Option<String>>, D::Error> {
    lenient_notes(d).map(Some)
}

fn serialize_time<S: Serializer>(time: &Option<NaiveTime>, s: S) -> Result<S::Ok, S::Error> {
    match time {
        Some(t) if t.second() == 0 => s.serialize_str(&t.format("%H:%M").to_string()),
        Some(t) => s.serialize_str(&t.format("%H:%M:%S").to_string()),
        None => s.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_count_form_input() {
        assert_eq!(parse_count("45"), 45);
        assert_eq!(parse_count("  30 min"), 30);
        assert_eq!(parse_count("abc"), 0);
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("-5"), 0);
        assert_eq!(parse_count("+12"), 12);
        assert_eq!(parse_count("99999999999"), u32::MAX);
    }

    #[test]
    fn test_deserialize_browser_record() {
        let raw = json!({
            "id": "1718000000000",
            "name": "Morning run",
            "date": "2024-06-10",
            "time": "07:30",
            "duration": "30",
            "calories": "200",
            "type": "run",
            "notes": "",
            "createdAt": "2024-06-10T07:45:00.000Z"
        });

        let workout: Workout = serde_json::from_value(raw).unwrap();

        assert_eq!(workout.id, "1718000000000");
        assert_eq!(workout.date, NaiveDate::from_ymd_opt(2024, 6, 10));
        assert_eq!(workout.time, NaiveTime::from_hms_opt(7, 30, 0));
        assert_eq!(workout.duration_minutes, 30);
        assert_eq!(workout.calories, 200);
        assert_eq!(workout.activity_type, "run");
        assert_eq!(workout.notes, Some(String::new()));
    }

    #[test]
    fn test_missing_and_garbage_fields_default() {
        let raw = json!({
            "id": "1",
            "date": "not a date",
            "time": "",
            "duration": null,
            "calories": "lots"
        });

        let workout: Workout = serde_json::from_value(raw).unwrap();

        assert_eq!(workout.date, None);
        assert_eq!(workout.time, None);
        assert_eq!(workout.duration_minutes, 0);
        assert_eq!(workout.calories, 0);
        assert_eq!(workout.activity_type, "");
    }

    #[test]
    fn test_null_text_fields_read_as_empty() {
        let raw = json!([
            { "id": "1", "name": "Run", "type": "run", "createdAt": "2024-06-10T07:45:00Z" },
            { "id": "2", "name": null, "type": null, "notes": 7, "createdAt": null }
        ]);

        let workouts: Vec<Workout> = serde_json::from_value(raw).unwrap();

        assert_eq!(workouts.len(), 2);
        assert_eq!(workouts[1].name, "");
        assert_eq!(workouts[1].activity_type, "");
        assert_eq!(workouts[1].notes, None);
        assert_eq!(workouts[1].created_at, "");
    }

    #[test]
    fn test_numeric_json_values() {
        let raw = json!({ "id": "1", "duration": 42.9, "calories": -10 });
        let workout: Workout = serde_json::from_value(raw).unwrap();
        assert_eq!(workout.duration_minutes, 42);
        assert_eq!(workout.calories, 0);
    }

    #[test]
    fn test_date_accepts_iso_datetime_prefix() {
        assert_eq!(
            parse_date("2024-06-10T00:00:00.000Z"),
            NaiveDate::from_ymd_opt(2024, 6, 10)
        );
        assert_eq!(parse_date("06/10/2024"), None);
    }

    #[test]
    fn test_time_serializes_as_hours_minutes() {
        let workout = Workout {
            id: "1".to_string(),
            name: "Swim".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, 10),
            time: NaiveTime::from_hms_opt(18, 5, 0),
            duration_minutes: 40,
            calories: 350,
            activity_type: "swim".to_string(),
            notes: None,
            created_at: "2024-06-10T18:50:00Z".to_string(),
        };

        let value = serde_json::to_value(&workout).unwrap();

        assert_eq!(value["time"], "18:05");
        assert_eq!(value["date"], "2024-06-10");
        assert_eq!(value["duration"], 40);
        assert_eq!(value["type"], "swim");
        assert_eq!(value["createdAt"], "2024-06-10T18:50:00Z");
        assert!(value.get("notes").is_none());
    }

    #[test]
    fn test_update_distinguishes_absent_from_cleared() {
        let absent: WorkoutUpdate = serde_json::from_value(json!({ "name": "x" })).unwrap();
        assert_eq!(absent.time, None);
        assert_eq!(absent.notes, None);
        assert_eq!(absent.duration_minutes, None);

        let cleared: WorkoutUpdate =
            serde_json::from_value(json!({ "time": "", "notes": null, "duration": "" })).unwrap();
        assert_eq!(cleared.time, Some(None));
        assert_eq!(cleared.notes, Some(None));
        assert_eq!(cleared.duration_minutes, Some(0));
    }

    #[test]
    fn test_apply_merges_only_supplied_fields() {
        let mut workout: Workout = serde_json::from_value(json!({
            "id": "7",
            "name": "Ride",
            "date": "2024-06-11",
            "time": "06:00",
            "duration": 60,
            "calories": 500,
            "type": "cycling",
            "notes": "windy",
            "createdAt": "2024-06-11T06:00:00Z"
        }))
        .unwrap();

        workout.apply(WorkoutUpdate {
            calories: Some(550),
            notes: Some(None),
            ..Default::default()
        });

        assert_eq!(workout.id, "7");
        assert_eq!(workout.name, "Ride");
        assert_eq!(workout.calories, 550);
        assert_eq!(workout.duration_minutes, 60);
        assert_eq!(workout.notes, None);
        assert_eq!(workout.created_at, "2024-06-11T06:00:00Z");
    }

    #[test]
    fn test_new_workout_requires_name_date_type() {
        let missing: NewWorkout =
            serde_json::from_value(json!({ "duration": "20", "date": "" })).unwrap();
        let errors = missing.validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 3);

        let ok: NewWorkout = serde_json::from_value(json!({
            "name": "Yoga",
            "date": "2024-06-12",
            "type": "yoga"
        }))
        .unwrap();
        assert!(ok.validate().is_ok());
    }
}
