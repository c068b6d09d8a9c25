// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request, Response};
use chrono::{DateTime, FixedOffset, NaiveDateTime};
use polypulse::config::Config;
use polypulse::db::MemorySlot;
use polypulse::routes::create_router;
use polypulse::services::WorkoutStore;
use polypulse::time_utils::FixedClock;
use polypulse::AppState;
use std::sync::Arc;

/// Wednesday afternoon; the week runs 2024-06-09 (Sun) to 2024-06-15 (Sat).
#[allow(dead_code)]
pub const TEST_NOW: &str = "2024-06-12 15:30:00";

/// Parse `YYYY-MM-DD HH:MM:SS` as a moment with a zero UTC offset.
#[allow(dead_code)]
pub fn moment(s: &str) -> DateTime<FixedOffset> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .expect("valid test timestamp")
        .and_utc()
        .fixed_offset()
}

/// Create a test app backed by an in-memory slot and a frozen clock.
/// Returns the router, the shared state and a handle on the slot.
#[allow(dead_code)]
pub fn create_test_app(now: &str) -> (axum::Router, Arc<AppState>, MemorySlot) {
    create_test_app_with_slot(now, MemorySlot::new())
}

#[allow(dead_code)]
pub fn create_test_app_with_slot(
    now: &str,
    slot: MemorySlot,
) -> (axum::Router, Arc<AppState>, MemorySlot) {
    let store = WorkoutStore::new(Box::new(slot.clone()));
    let state = Arc::new(AppState::new(
        Config::test_default(),
        store,
        Box::new(FixedClock(moment(now))),
    ));

    (create_router(state.clone()), state, slot)
}

/// Build a JSON request.
#[allow(dead_code)]
pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a request without a body.
#[allow(dead_code)]
pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
