// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Integration tests for interest-match notifications and the feed.

mod common;

use common::{seed_activity, seed_user, services_at, test_services};
use silverkaki::models::{
    notification::MAX_NOTIFICATIONS_PER_USER, ActivityLevel, ExertionType, Intensity,
    NotificationKind,
};
use silverkaki::store::EntityStore;

fn seed_matching_activity(store: &EntityStore, id: &str, date: &str) {
    seed_activity(
        store,
        id,
        "singing",
        ExertionType::Sit,
        Intensity::Low,
        date,
        "14:00:00",
        "16:00:00",
    );
}

#[test]
fn test_interest_match_aggregates_upcoming_activities() {
    let (services, store) = test_services();
    seed_user(&store, "user_001", ActivityLevel::Moderate, false, &["singing"]);
    seed_matching_activity(&store, "karaoke-1", "2026-03-10");
    seed_matching_activity(&store, "karaoke-2", "2026-03-12");
    // Outside the three-day look-ahead; must not be counted.
    seed_matching_activity(&store, "karaoke-late", "2026-03-20");

    let notification = services
        .notifications
        .generate_interest_matches("user_001")
        .unwrap()
        .expect("a notification should be emitted");

    assert_eq!(notification.kind, NotificationKind::InterestMatch);
    assert!(notification.message.starts_with("2 activities"));
    assert!(!notification.read);
}

#[test]
fn test_interest_match_is_deduplicated_within_24_hours() {
    let (services, store) = test_services();
    seed_user(&store, "user_001", ActivityLevel::Moderate, false, &["singing"]);
    seed_matching_activity(&store, "karaoke-1", "2026-03-11");

    assert!(services
        .notifications
        .generate_interest_matches("user_001")
        .unwrap()
        .is_some());

    // Same window: nothing new, still a single record.
    assert!(services
        .notifications
        .generate_interest_matches("user_001")
        .unwrap()
        .is_none());
    assert_eq!(services.notifications.list_for("user_001").unwrap().len(), 1);

    // A different user is deduplicated independently.
    seed_user(&store, "user_002", ActivityLevel::High, false, &["singing"]);
    assert!(services
        .notifications
        .generate_interest_matches("user_002")
        .unwrap()
        .is_some());
}

#[test]
fn test_interest_match_emits_again_after_the_window() {
    let (services, store) = test_services();
    seed_user(&store, "user_001", ActivityLevel::Moderate, false, &["singing"]);
    seed_matching_activity(&store, "karaoke-1", "2026-03-11");

    services
        .notifications
        .generate_interest_matches("user_001")
        .unwrap()
        .expect("first notification");

    let next_day = services_at(&store, "2026-03-11T13:00:00Z");
    let repeat = next_day
        .notifications
        .generate_interest_matches("user_001")
        .unwrap();
    assert!(repeat.is_some());
    assert_eq!(next_day.notifications.list_for("user_001").unwrap().len(), 2);
}

#[test]
fn test_no_interests_or_no_matches_emit_nothing() {
    let (services, store) = test_services();
    seed_user(&store, "user_bare", ActivityLevel::Moderate, false, &[]);
    seed_user(&store, "user_niche", ActivityLevel::Moderate, false, &["cooking"]);
    seed_matching_activity(&store, "karaoke-1", "2026-03-11");

    assert!(services
        .notifications
        .generate_interest_matches("user_bare")
        .unwrap()
        .is_none());
    assert!(services
        .notifications
        .generate_interest_matches("user_niche")
        .unwrap()
        .is_none());
}

#[test]
fn test_message_samples_at_most_three_names() {
    let (services, store) = test_services();
    seed_user(&store, "user_001", ActivityLevel::Moderate, false, &["singing"]);
    for i in 0..5 {
        seed_matching_activity(&store, &format!("karaoke-{}", i), "2026-03-11");
    }

    let notification = services
        .notifications
        .generate_interest_matches("user_001")
        .unwrap()
        .unwrap();

    assert!(notification.message.starts_with("5 activities"));
    // Three quoted names joined by commas.
    let names = notification.message.split(": ").nth(1).unwrap();
    assert_eq!(names.split(", ").count(), 3);
}

#[test]
fn test_feed_is_capped_per_user() {
    let (services, store) = test_services();
    seed_user(&store, "user_001", ActivityLevel::Moderate, false, &[]);
    seed_user(&store, "user_002", ActivityLevel::Moderate, false, &[]);

    services
        .notifications
        .push("user_002", NotificationKind::Welcome, "Hello", "Welcome!")
        .unwrap();

    for i in 0..(MAX_NOTIFICATIONS_PER_USER + 5) {
        services
            .notifications
            .push(
                "user_001",
                NotificationKind::HealthAlert,
                "Alert",
                &format!("Reading {}", i),
            )
            .unwrap();
    }

    let feed = services.notifications.list_for("user_001").unwrap();
    assert_eq!(feed.len(), MAX_NOTIFICATIONS_PER_USER);
    // Newest first; the oldest entries were trimmed.
    assert!(feed[0].message.ends_with("24"));

    // The other user's feed is untouched.
    assert_eq!(services.notifications.list_for("user_002").unwrap().len(), 1);
}

#[test]
fn test_mark_read_and_unread_count() {
    let (services, store) = test_services();
    seed_user(&store, "user_001", ActivityLevel::Moderate, false, &[]);

    let first = services
        .notifications
        .push("user_001", NotificationKind::Welcome, "Hello", "Welcome!")
        .unwrap();
    services
        .notifications
        .push("user_001", NotificationKind::HealthAlert, "Alert", "BP high")
        .unwrap();

    assert_eq!(services.notifications.unread_count("user_001").unwrap(), 2);
    services.notifications.mark_read(&first.id).unwrap();
    assert_eq!(services.notifications.unread_count("user_001").unwrap(), 1);
}
