// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Business logic services.

pub mod forum;
pub mod health;
pub mod lifecycle;
pub mod notify;
pub mod profile;
pub mod rewards;
pub mod risk;

pub use forum::ForumService;
pub use health::HealthService;
pub use lifecycle::{RegistrationLifecycle, RegistrationOutcome};
pub use notify::NotificationService;
pub use profile::{NewUserProfile, ProfileService, ProfileUpdate};
pub use rewards::RewardsLedger;
pub use risk::{fall_risk, RecommendationEngine, RiskTier};
