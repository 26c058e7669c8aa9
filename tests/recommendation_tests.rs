// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Integration tests for fall-risk scoring and safety-gated recommendations.

mod common;

use common::{seed_activity, seed_user, test_services};
use silverkaki::error::AppError;
use silverkaki::models::{ActivityLevel, ExertionType, Intensity};
use silverkaki::services::{fall_risk, RiskTier};
use silverkaki::store::EntityStore;

fn seed_catalog(store: &EntityStore) {
    seed_activity(
        store,
        "walk-1",
        "walking",
        ExertionType::Walk,
        Intensity::High,
        "2026-03-11",
        "08:00:00",
        "10:00:00",
    );
    seed_activity(
        store,
        "tai-chi-1",
        "tai-chi",
        ExertionType::Stand,
        Intensity::Moderate,
        "2026-03-11",
        "09:00:00",
        "11:00:00",
    );
    seed_activity(
        store,
        "games-1",
        "games",
        ExertionType::Sit,
        Intensity::Low,
        "2026-03-11",
        "15:00:00",
        "17:00:00",
    );
    seed_activity(
        store,
        "art-1",
        "art",
        ExertionType::Sit,
        Intensity::Low,
        "2026-03-12",
        "10:30:00",
        "12:30:00",
    );
}

#[test]
fn test_high_risk_user_gets_only_seated_interests() {
    let (services, store) = test_services();
    seed_catalog(&store);
    // mobility issue (+3), low level (+2), two hospital visits (+2) = 7
    let mut user = seed_user(
        &store,
        "user_003",
        ActivityLevel::Low,
        true,
        &["walking", "games", "tai-chi"],
    );
    user.hospital_visits = 2;
    store.upsert_user(&user).unwrap();
    assert_eq!(fall_risk(&user), RiskTier::High);

    let picks = services.recommendations.recommend("user_003").unwrap();
    let ids: Vec<&str> = picks.iter().map(|a| a.id.as_str()).collect();

    // Walk-type activities are excluded even though they match interests.
    assert_eq!(ids, vec!["games-1"]);
}

#[test]
fn test_high_risk_admits_safe_category_regardless_of_exertion() {
    let (services, store) = test_services();
    seed_activity(
        &store,
        "talk-1",
        "health-talk",
        ExertionType::Stand,
        Intensity::Low,
        "2026-03-11",
        "14:30:00",
        "16:30:00",
    );
    seed_user(&store, "user_003", ActivityLevel::Low, true, &["health-talk"]);

    let picks = services.recommendations.recommend("user_003").unwrap();
    assert_eq!(picks.len(), 1);
    assert_eq!(picks[0].id, "talk-1");
}

#[test]
fn test_moderate_risk_excludes_walks_only() {
    let (services, store) = test_services();
    seed_catalog(&store);
    // moderate level (+1) and one hospital visit (+1) = moderate tier
    let mut user = seed_user(
        &store,
        "user_001",
        ActivityLevel::Moderate,
        false,
        &["walking", "tai-chi", "games"],
    );
    user.hospital_visits = 1;
    store.upsert_user(&user).unwrap();
    assert_eq!(fall_risk(&user), RiskTier::Moderate);

    let picks = services.recommendations.recommend("user_001").unwrap();
    let ids: Vec<&str> = picks.iter().map(|a| a.id.as_str()).collect();

    assert!(ids.contains(&"tai-chi-1"));
    assert!(ids.contains(&"games-1"));
    assert!(!ids.contains(&"walk-1"));
}

#[test]
fn test_low_risk_user_is_limited_by_interest_only() {
    let (services, store) = test_services();
    seed_catalog(&store);
    seed_user(
        &store,
        "user_002",
        ActivityLevel::High,
        false,
        &["walking", "art"],
    );

    let picks = services.recommendations.recommend("user_002").unwrap();
    let ids: Vec<&str> = picks.iter().map(|a| a.id.as_str()).collect();

    assert!(ids.contains(&"walk-1"));
    assert!(ids.contains(&"art-1"));
    // Safe but outside the interest set.
    assert!(!ids.contains(&"games-1"));
}

#[test]
fn test_no_interests_means_no_recommendations() {
    let (services, store) = test_services();
    seed_catalog(&store);
    seed_user(&store, "user_004", ActivityLevel::High, false, &[]);

    let picks = services.recommendations.recommend("user_004").unwrap();
    assert!(picks.is_empty());
}

#[test]
fn test_recommend_unknown_user_is_not_found() {
    let (services, _store) = test_services();
    let result = services.recommendations.recommend("ghost");
    assert!(matches!(result, Err(AppError::NotFound(_))));
}
