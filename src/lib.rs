// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! SilverKaki: community engagement core for active-ageing centres
//!
//! This crate provides the registration/feedback/points lifecycle, fall-risk
//! recommendations, health self-reports, and notifications behind a thin UI
//! collaborator. All state lives behind an injected key-value store.

pub mod clock;
pub mod config;
pub mod error;
pub mod ids;
pub mod models;
pub mod seed;
pub mod services;
pub mod store;
pub mod time_utils;

use std::sync::Arc;

use clock::Clock;
use ids::IdGen;
use services::{
    ForumService, HealthService, NotificationService, ProfileService, RecommendationEngine,
    RegistrationLifecycle, RewardsLedger,
};
use store::EntityStore;

/// All services wired over one store, clock, and id generator.
#[derive(Clone)]
pub struct AppServices {
    pub lifecycle: RegistrationLifecycle,
    pub rewards: RewardsLedger,
    pub recommendations: RecommendationEngine,
    pub notifications: NotificationService,
    pub health: HealthService,
    pub profiles: ProfileService,
    pub forum: ForumService,
}

impl AppServices {
    pub fn new(store: EntityStore, clock: Arc<dyn Clock>, ids: Arc<dyn IdGen>) -> Self {
        let rewards = RewardsLedger::new(store.clone(), clock.clone(), ids.clone());
        let notifications = NotificationService::new(store.clone(), clock.clone(), ids.clone());

        Self {
            lifecycle: RegistrationLifecycle::new(
                store.clone(),
                clock.clone(),
                ids.clone(),
                rewards.clone(),
            ),
            rewards,
            recommendations: RecommendationEngine::new(store.clone()),
            notifications: notifications.clone(),
            health: HealthService::new(store.clone(), clock.clone(), notifications.clone()),
            profiles: ProfileService::new(store.clone(), clock.clone(), ids.clone(), notifications),
            forum: ForumService::new(store, clock, ids),
        }
    }
}
