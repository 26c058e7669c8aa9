// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fall-risk scoring and safety-gated activity recommendation.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::{Activity, ActivityLevel, ExertionType, User};
use crate::store::EntityStore;

/// Coarse safety classification derived from user health attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RiskTier::Low => "low",
            RiskTier::Moderate => "moderate",
            RiskTier::High => "high",
        };
        f.write_str(label)
    }
}

/// Categories admitted for high-risk users regardless of exertion type.
const SAFE_CATEGORIES: &[&str] = &["health-talk"];

/// Deterministic fall-risk score.
///
/// Mobility issues carry the highest weight, then low activity level, then
/// hospital-visit history as a frailty proxy. Pure function of the profile.
pub fn fall_risk(user: &User) -> RiskTier {
    let mut score = 0u32;

    if user.has_mobility_issue {
        score += 3;
    }

    score += match user.activity_level {
        ActivityLevel::Low => 2,
        ActivityLevel::Moderate => 1,
        ActivityLevel::High => 0,
    };

    score += match user.hospital_visits {
        0 => 0,
        1 => 1,
        _ => 2,
    };

    if score >= 4 {
        RiskTier::High
    } else if score >= 2 {
        RiskTier::Moderate
    } else {
        RiskTier::Low
    }
}

/// Filters the catalog by risk-tier safety, then by interest.
#[derive(Clone)]
pub struct RecommendationEngine {
    store: EntityStore,
}

impl RecommendationEngine {
    pub fn new(store: EntityStore) -> Self {
        Self { store }
    }

    /// Safe predicate for one activity under a risk tier.
    fn is_safe(tier: RiskTier, activity: &Activity) -> bool {
        match tier {
            RiskTier::High => {
                activity.exertion == ExertionType::Sit
                    || SAFE_CATEGORIES.contains(&activity.category.as_str())
            }
            RiskTier::Moderate => activity.exertion != ExertionType::Walk,
            RiskTier::Low => true,
        }
    }

    /// Recommend activities: safety-filter the full catalog by the user's
    /// fall-risk tier, then restrict to their interest categories.
    ///
    /// Results keep catalog order; callers re-sort by date and time.
    pub fn recommend(&self, user_id: &str) -> Result<Vec<Activity>> {
        let user = self
            .store
            .get_user(user_id)?
            .ok_or_else(|| AppError::NotFound(format!("user {}", user_id)))?;

        let tier = fall_risk(&user);
        Ok(self
            .store
            .list_activities()?
            .into_iter()
            .filter(|a| Self::is_safe(tier, a))
            .filter(|a| user.is_interested_in(&a.category))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;
    use chrono::NaiveDate;

    fn sample_user(
        has_mobility_issue: bool,
        activity_level: ActivityLevel,
        hospital_visits: u32,
    ) -> User {
        let mut user = User::new(
            "user_0001".to_string(),
            "Uncle Tan".to_string(),
            Gender::Male,
            activity_level,
            has_mobility_issue,
            vec![],
            NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
        );
        user.hospital_visits = hospital_visits;
        user
    }

    #[test]
    fn test_healthy_active_user_is_low_risk() {
        let user = sample_user(false, ActivityLevel::High, 0);
        assert_eq!(fall_risk(&user), RiskTier::Low);
    }

    #[test]
    fn test_moderate_band_starts_at_two() {
        // moderate level (+1) and one hospital visit (+1)
        let user = sample_user(false, ActivityLevel::Moderate, 1);
        assert_eq!(fall_risk(&user), RiskTier::Moderate);
    }

    #[test]
    fn test_mobility_and_low_level_is_high_risk() {
        // +3 mobility, +2 low level
        let user = sample_user(true, ActivityLevel::Low, 0);
        assert_eq!(fall_risk(&user), RiskTier::High);
    }

    #[test]
    fn test_worst_case_scores_seven() {
        let user = sample_user(true, ActivityLevel::Low, 2);
        assert_eq!(fall_risk(&user), RiskTier::High);
    }

    #[test]
    fn test_hospital_visits_cap_at_two() {
        let twice = sample_user(false, ActivityLevel::High, 2);
        let often = sample_user(false, ActivityLevel::High, 9);
        assert_eq!(fall_risk(&twice), fall_risk(&often));
    }

    #[test]
    fn test_deterministic_for_identical_inputs() {
        let a = sample_user(true, ActivityLevel::Moderate, 1);
        let b = sample_user(true, ActivityLevel::Moderate, 1);
        assert_eq!(fall_risk(&a), fall_risk(&b));
    }
}
