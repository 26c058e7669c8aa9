// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Health self-reports with threshold alerts.
//!
//! Readings are prepended to the user's history (most recent first, last 30
//! kept). Qualifying readings push a health alert synchronously, independent
//! of the interest-match dedup window.

use std::sync::Arc;

use chrono::Duration;

use crate::clock::Clock;
use crate::error::{AppError, Result};
use crate::models::user::MAX_READINGS;
use crate::models::{
    BloodPressureReading, BloodSugarKind, BloodSugarReading, NotificationKind, User, WeightReading,
};
use crate::services::notify::NotificationService;
use crate::store::EntityStore;

/// Elevated blood pressure: systolic/diastolic at or above these values.
pub const BP_SYSTOLIC_ALERT: u32 = 140;
pub const BP_DIASTOLIC_ALERT: u32 = 90;
/// Elevated blood sugar in mmol/L, by reading kind.
pub const SUGAR_FASTING_ALERT: f64 = 7.0;
pub const SUGAR_AFTER_MEAL_ALERT: f64 = 11.0;

/// Records health readings and raises threshold alerts.
#[derive(Clone)]
pub struct HealthService {
    store: EntityStore,
    clock: Arc<dyn Clock>,
    notifications: NotificationService,
}

impl HealthService {
    pub fn new(
        store: EntityStore,
        clock: Arc<dyn Clock>,
        notifications: NotificationService,
    ) -> Self {
        Self {
            store,
            clock,
            notifications,
        }
    }

    fn load_user(&self, user_id: &str) -> Result<User> {
        self.store
            .get_user(user_id)?
            .ok_or_else(|| AppError::NotFound(format!("user {}", user_id)))
    }

    pub fn add_blood_pressure(
        &self,
        user_id: &str,
        systolic: u32,
        diastolic: u32,
        pulse: Option<u32>,
    ) -> Result<BloodPressureReading> {
        let mut user = self.load_user(user_id)?;

        let reading = BloodPressureReading {
            recorded_at: self.clock.now(),
            systolic,
            diastolic,
            pulse,
        };
        user.blood_pressure.insert(0, reading.clone());
        user.blood_pressure.truncate(MAX_READINGS);
        self.store.upsert_user(&user)?;

        if systolic >= BP_SYSTOLIC_ALERT || diastolic >= BP_DIASTOLIC_ALERT {
            tracing::warn!(user_id, systolic, diastolic, "Elevated blood pressure reading");
            self.notifications.push(
                user_id,
                NotificationKind::HealthAlert,
                "Blood pressure alert",
                &format!(
                    "Your reading {}/{} is elevated. Consider consulting your doctor.",
                    systolic, diastolic
                ),
            )?;
        }

        Ok(reading)
    }

    pub fn add_blood_sugar(
        &self,
        user_id: &str,
        level: f64,
        kind: BloodSugarKind,
    ) -> Result<BloodSugarReading> {
        let mut user = self.load_user(user_id)?;

        let reading = BloodSugarReading {
            recorded_at: self.clock.now(),
            level,
            kind,
        };
        user.blood_sugar.insert(0, reading.clone());
        user.blood_sugar.truncate(MAX_READINGS);
        self.store.upsert_user(&user)?;

        let (threshold, label) = match kind {
            BloodSugarKind::Fasting => (SUGAR_FASTING_ALERT, "fasting"),
            BloodSugarKind::AfterMeal => (SUGAR_AFTER_MEAL_ALERT, "after-meal"),
        };
        if level >= threshold {
            tracing::warn!(user_id, level, kind = label, "Elevated blood sugar reading");
            self.notifications.push(
                user_id,
                NotificationKind::HealthAlert,
                "Blood sugar alert",
                &format!("Your {} sugar {} mmol/L is elevated.", label, level),
            )?;
        }

        Ok(reading)
    }

    pub fn add_weight(&self, user_id: &str, kg: f64) -> Result<WeightReading> {
        let mut user = self.load_user(user_id)?;

        let reading = WeightReading {
            recorded_at: self.clock.now(),
            kg,
        };
        user.weight.insert(0, reading.clone());
        user.weight.truncate(MAX_READINGS);
        self.store.upsert_user(&user)?;

        Ok(reading)
    }

    /// Confirmed attendances over the past seven days, for the health screen.
    ///
    /// Registrations pointing at a deleted activity are skipped.
    pub fn weekly_attended_count(&self, user_id: &str) -> Result<usize> {
        let week_ago = self.clock.today() - Duration::days(7);
        let mut count = 0;
        for registration in self.store.registrations_for_user(user_id)? {
            if !registration.state.attendance_confirmed() {
                continue;
            }
            if let Some(activity) = self.store.get_activity(&registration.activity_id)? {
                if activity.date >= week_ago {
                    count += 1;
                }
            }
        }
        Ok(count)
    }
}
