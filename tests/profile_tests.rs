// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Integration tests for profile creation and the profile selector.

mod common;

use common::{seed_activity, seed_user, test_services};
use silverkaki::error::AppError;
use silverkaki::models::{
    ActivityLevel, ExertionType, Gender, Intensity, NotificationKind,
};
use silverkaki::services::{NewUserProfile, ProfileUpdate};

#[test]
fn test_create_user_selects_profile_and_welcomes() {
    let (services, store) = test_services();

    let user = services
        .profiles
        .create_user(NewUserProfile {
            name: "Auntie Rose".to_string(),
            gender: Gender::Female,
            activity_level: ActivityLevel::Moderate,
            has_mobility_issue: false,
            interests: vec!["singing".to_string()],
        })
        .unwrap();

    assert_eq!(user.points, 0);
    assert_eq!(user.badges, vec!["first_timer".to_string()]);
    assert_eq!(store.current_user_id().unwrap(), Some(user.id.clone()));

    let feed = services.notifications.list_for(&user.id).unwrap();
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].kind, NotificationKind::Welcome);
}

#[test]
fn test_switch_user_regenerates_interest_matches() {
    let (services, store) = test_services();
    seed_user(&store, "user_001", ActivityLevel::Moderate, false, &["singing"]);
    seed_activity(
        &store,
        "karaoke-1",
        "singing",
        ExertionType::Sit,
        Intensity::Low,
        "2026-03-11",
        "14:00:00",
        "16:00:00",
    );

    let user = services.profiles.switch_user("user_001").unwrap();
    assert_eq!(user.name, "Member user_001");
    assert_eq!(store.current_user_id().unwrap().as_deref(), Some("user_001"));

    let feed = services.notifications.list_for("user_001").unwrap();
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].kind, NotificationKind::InterestMatch);

    // Switching again inside the dedup window adds nothing.
    services.profiles.switch_user("user_001").unwrap();
    assert_eq!(services.notifications.list_for("user_001").unwrap().len(), 1);
}

#[test]
fn test_switch_to_unknown_user_is_not_found() {
    let (services, store) = test_services();

    let result = services.profiles.switch_user("ghost");
    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(store.current_user_id().unwrap().is_none());
}

#[test]
fn test_logout_clears_selection() {
    let (services, store) = test_services();
    seed_user(&store, "user_001", ActivityLevel::Moderate, false, &[]);

    services.profiles.switch_user("user_001").unwrap();
    assert!(services.profiles.current_user().unwrap().is_some());

    services.profiles.logout().unwrap();
    assert!(services.profiles.current_user().unwrap().is_none());
}

#[test]
fn test_update_profile_merges_partial_changes() {
    let (services, store) = test_services();
    seed_user(&store, "user_001", ActivityLevel::Moderate, true, &["games"]);

    let updated = services
        .profiles
        .update_profile(
            "user_001",
            ProfileUpdate {
                activity_level: Some(ActivityLevel::High),
                interests: Some(vec!["dance".to_string()]),
                ..ProfileUpdate::default()
            },
        )
        .unwrap();

    assert_eq!(updated.activity_level, ActivityLevel::High);
    assert_eq!(updated.interests, vec!["dance".to_string()]);
    // Untouched fields survive.
    assert!(updated.has_mobility_issue);
    assert_eq!(updated.name, "Member user_001");

    let stored = store.get_user("user_001").unwrap().unwrap();
    assert_eq!(stored.activity_level, ActivityLevel::High);
}
