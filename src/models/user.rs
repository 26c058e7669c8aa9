//! User profile model with health reading history.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// How many self-reported health readings to retain per series.
pub const MAX_READINGS: usize = 30;

/// Self-assessed activity capacity, ordered low < moderate < high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
}

impl ActivityLevel {
    /// Ordinal capacity used by the intensity safety gate.
    pub fn capacity(self) -> u8 {
        match self {
            ActivityLevel::Low => 1,
            ActivityLevel::Moderate => 2,
            ActivityLevel::High => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// One blood pressure reading, most recent kept first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BloodPressureReading {
    pub recorded_at: DateTime<Utc>,
    pub systolic: u32,
    pub diastolic: u32,
    /// Pulse is optional on manual entry
    pub pulse: Option<u32>,
}

/// Whether a blood sugar reading was taken fasting or after a meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BloodSugarKind {
    Fasting,
    AfterMeal,
}

/// One blood sugar reading in mmol/L.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BloodSugarReading {
    pub recorded_at: DateTime<Utc>,
    pub level: f64,
    pub kind: BloodSugarKind,
}

/// One weight reading in kilograms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightReading {
    pub recorded_at: DateTime<Utc>,
    pub kg: f64,
}

/// Voucher redemption record; only the most recent redemption is retained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoucherRef {
    pub reference: String,
    pub redeemed_on: NaiveDate,
}

/// Member profile stored in the `users` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Stable id (also the document key)
    pub id: String,
    pub name: String,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub has_mobility_issue: bool,
    /// Blood pressure history, most recent first, capped at [`MAX_READINGS`]
    #[serde(default)]
    pub blood_pressure: Vec<BloodPressureReading>,
    /// Blood sugar history, most recent first, capped at [`MAX_READINGS`]
    #[serde(default)]
    pub blood_sugar: Vec<BloodSugarReading>,
    /// Weight history, most recent first, capped at [`MAX_READINGS`]
    #[serde(default)]
    pub weight: Vec<WeightReading>,
    /// Hospital visits in the past year, used for fall-risk scoring
    #[serde(default)]
    pub hospital_visits: u32,
    /// Point balance; unsigned so it can never go negative
    #[serde(default)]
    pub points: u64,
    pub joined_date: NaiveDate,
    /// Activity categories the member cares about
    #[serde(default)]
    pub interests: Vec<String>,
    /// Earned badge tags
    #[serde(default)]
    pub badges: Vec<String>,
    /// Most recent voucher redemption, overwritten on each redemption
    #[serde(default)]
    pub last_voucher: Option<VoucherRef>,
}

impl User {
    /// New member with an empty history and the starter badge.
    pub fn new(
        id: String,
        name: String,
        gender: Gender,
        activity_level: ActivityLevel,
        has_mobility_issue: bool,
        interests: Vec<String>,
        joined_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            name,
            gender,
            activity_level,
            has_mobility_issue,
            blood_pressure: Vec::new(),
            blood_sugar: Vec::new(),
            weight: Vec::new(),
            hospital_visits: 0,
            points: 0,
            joined_date,
            interests,
            badges: vec!["first_timer".to_string()],
            last_voucher: None,
        }
    }

    pub fn is_interested_in(&self, category: &str) -> bool {
        self.interests.iter().any(|i| i == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_ordering() {
        assert!(ActivityLevel::Low.capacity() < ActivityLevel::Moderate.capacity());
        assert!(ActivityLevel::Moderate.capacity() < ActivityLevel::High.capacity());
    }

    #[test]
    fn test_new_user_defaults() {
        let user = User::new(
            "user_0001".to_string(),
            "Uncle Tan".to_string(),
            Gender::Male,
            ActivityLevel::Moderate,
            true,
            vec!["tai-chi".to_string()],
            NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
        );

        assert_eq!(user.points, 0);
        assert_eq!(user.badges, vec!["first_timer".to_string()]);
        assert!(user.last_voucher.is_none());
        assert!(user.is_interested_in("tai-chi"));
        assert!(!user.is_interested_in("dance"));
    }
}
