// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use std::sync::Arc;

use chrono::NaiveDate;

use silverkaki::clock::FixedClock;
use silverkaki::ids::SequentialIdGen;
use silverkaki::models::{Activity, ActivityLevel, ExertionType, Gender, Intensity, User};
use silverkaki::store::EntityStore;
use silverkaki::AppServices;

/// Tuesday lunchtime, the reference instant for most tests.
#[allow(dead_code)]
pub const TEST_NOW: &str = "2026-03-10T12:00:00Z";

/// Services over a fresh in-memory store at [`TEST_NOW`].
#[allow(dead_code)]
pub fn test_services() -> (AppServices, EntityStore) {
    let store = EntityStore::new_in_memory();
    let services = services_at(&store, TEST_NOW);
    (services, store)
}

/// Services over an existing store with the clock pinned to `now`.
///
/// Building a second instance over the same store simulates the passage of
/// wall-clock time between operations.
#[allow(dead_code)]
pub fn services_at(store: &EntityStore, now: &str) -> AppServices {
    AppServices::new(
        store.clone(),
        Arc::new(FixedClock::at(now)),
        Arc::new(SequentialIdGen::new()),
    )
}

/// Insert a user with the given risk attributes and interests.
#[allow(dead_code)]
pub fn seed_user(
    store: &EntityStore,
    id: &str,
    activity_level: ActivityLevel,
    has_mobility_issue: bool,
    interests: &[&str],
) -> User {
    let user = User::new(
        id.to_string(),
        format!("Member {}", id),
        Gender::Female,
        activity_level,
        has_mobility_issue,
        interests.iter().map(|i| i.to_string()).collect(),
        NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
    );
    store.upsert_user(&user).unwrap();
    user
}

/// Append an activity occurrence to the catalog.
#[allow(dead_code)]
pub fn seed_activity(
    store: &EntityStore,
    id: &str,
    category: &str,
    exertion: ExertionType,
    intensity: Intensity,
    date: &str,
    start: &str,
    end: &str,
) -> Activity {
    let activity = Activity::new(
        id.to_string(),
        format!("Activity {}", id),
        category.to_string(),
        exertion,
        intensity,
        date.parse().unwrap(),
        start.parse().unwrap(),
        end.parse().unwrap(),
        "care_corner".to_string(),
        String::new(),
        30,
        None,
    )
    .unwrap();

    let mut catalog = store.list_activities().unwrap();
    catalog.push(activity.clone());
    store.set_activities(&catalog).unwrap();
    activity
}
