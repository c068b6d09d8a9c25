use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use criterion::{criterion_group, criterion_main, Criterion};
use polypulse::models::Workout;
use polypulse::services::insights::{
    calculate_stats, daily_series, personal_records, type_distribution, weekly_insights,
};
use std::hint::black_box;

const ACTIVITY_TYPES: [&str; 5] = ["run", "yoga", "cycling", "swim", "strength"];

/// A busy week: several workouts a day, spread over the week of 2024-06-09.
fn build_week(count: usize) -> Vec<Workout> {
    let week_start = NaiveDate::from_ymd_opt(2024, 6, 9).expect("valid date");
    (0..count)
        .map(|i| Workout {
            id: i.to_string(),
            name: format!("Workout {}", i),
            date: Some(week_start + Duration::days((i % 7) as i64)),
            time: NaiveTime::from_hms_opt((6 + i % 14) as u32, 0, 0),
            duration_minutes: (20 + i % 70) as u32,
            calories: (150 + (i * 37) % 600) as u32,
            activity_type: ACTIVITY_TYPES[i % ACTIVITY_TYPES.len()].to_string(),
            notes: None,
            created_at: "2024-06-09T00:00:00Z".to_string(),
        })
        .collect()
}

fn benchmark_insights(c: &mut Criterion) {
    let now = NaiveDateTime::parse_from_str("2024-06-12 15:30:00", "%Y-%m-%d %H:%M:%S")
        .expect("valid timestamp");
    let workouts = build_week(500);

    let mut group = c.benchmark_group("weekly_insights");

    group.bench_function("calculate_stats", |b| {
        b.iter(|| calculate_stats(black_box(&workouts), now))
    });

    group.bench_function("type_distribution", |b| {
        b.iter(|| type_distribution(black_box(&workouts)))
    });

    group.bench_function("daily_series", |b| {
        b.iter(|| daily_series(black_box(&workouts), now.date()))
    });

    group.bench_function("personal_records", |b| {
        b.iter(|| personal_records(black_box(&workouts)))
    });

    group.bench_function("full_bundle", |b| {
        b.iter(|| weekly_insights(black_box(&workouts), now))
    });

    group.finish();
}

criterion_group!(benches, benchmark_insights);
criterion_main!(benches);
