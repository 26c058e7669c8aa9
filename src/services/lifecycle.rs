// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Registration lifecycle service.
//!
//! Governs the state of a user's relationship to an activity occurrence:
//! joining, leaving, attendance confirmation, and the post-activity feedback
//! survey, with the point awards tied to each transition.

use std::sync::Arc;

use crate::clock::Clock;
use crate::error::{AppError, Result};
use crate::ids::IdGen;
use crate::models::{
    Activity, ActivityLevel, ActivityWindow, Feedback, Intensity, Registration, RegistrationState,
    User,
};
use crate::services::rewards::{RewardsLedger, ATTENDANCE_POINTS, FEEDBACK_POINTS};
use crate::store::EntityStore;

/// Result of a registration attempt.
#[derive(Debug)]
pub enum RegistrationOutcome {
    /// Registration created.
    Registered(Registration),
    /// The activity's intensity exceeds the user's capacity; the UI must ask
    /// for explicit confirmation and then call
    /// [`RegistrationLifecycle::register_confirmed`].
    NeedsConfirmation {
        activity_id: String,
        intensity: Intensity,
        user_level: ActivityLevel,
    },
}

/// State machine over registrations, reacting into the points ledger.
#[derive(Clone)]
pub struct RegistrationLifecycle {
    store: EntityStore,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGen>,
    rewards: RewardsLedger,
}

impl RegistrationLifecycle {
    pub fn new(
        store: EntityStore,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGen>,
        rewards: RewardsLedger,
    ) -> Self {
        Self {
            store,
            clock,
            ids,
            rewards,
        }
    }

    fn load_user(&self, user_id: &str) -> Result<User> {
        self.store
            .get_user(user_id)?
            .ok_or_else(|| AppError::NotFound(format!("user {}", user_id)))
    }

    fn load_activity(&self, activity_id: &str) -> Result<Activity> {
        self.store
            .get_activity(activity_id)?
            .ok_or_else(|| AppError::NotFound(format!("activity {}", activity_id)))
    }

    fn window_of(&self, activity: &Activity) -> ActivityWindow {
        activity.window(self.clock.today(), self.clock.time_of_day())
    }

    /// Join/leave is only permitted before the activity starts.
    fn ensure_joinable(&self, activity: &Activity) -> Result<()> {
        match self.window_of(activity) {
            ActivityWindow::Upcoming => Ok(()),
            window => Err(AppError::OutOfWindow(window)),
        }
    }

    fn advance(registration: &mut Registration, next: RegistrationState) -> Result<()> {
        if !registration.state.can_advance_to(next) {
            return Err(AppError::InvalidTransition(format!(
                "registration {} cannot move {:?} -> {:?}",
                registration.id, registration.state, next
            )));
        }
        registration.state = next;
        Ok(())
    }

    /// Register a user for an upcoming activity.
    ///
    /// If the activity's intensity exceeds the user's activity-level capacity
    /// the registration is deferred with
    /// [`RegistrationOutcome::NeedsConfirmation`] instead of being created.
    pub fn register(&self, user_id: &str, activity_id: &str) -> Result<RegistrationOutcome> {
        let user = self.load_user(user_id)?;
        let activity = self.load_activity(activity_id)?;

        self.ensure_joinable(&activity)?;
        if self.store.find_registration(user_id, activity_id)?.is_some() {
            return Err(AppError::InvalidTransition(format!(
                "user {} is already registered for {}",
                user_id, activity_id
            )));
        }

        if activity.intensity.rank() > user.activity_level.capacity() {
            return Ok(RegistrationOutcome::NeedsConfirmation {
                activity_id: activity.id,
                intensity: activity.intensity,
                user_level: user.activity_level,
            });
        }

        Ok(RegistrationOutcome::Registered(
            self.insert_registration(&user, &activity)?,
        ))
    }

    /// Override entry point: the user has explicitly confirmed an activity
    /// above their capacity, so the safety gate is bypassed.
    pub fn register_confirmed(&self, user_id: &str, activity_id: &str) -> Result<Registration> {
        let user = self.load_user(user_id)?;
        let activity = self.load_activity(activity_id)?;

        self.ensure_joinable(&activity)?;
        if self.store.find_registration(user_id, activity_id)?.is_some() {
            return Err(AppError::InvalidTransition(format!(
                "user {} is already registered for {}",
                user_id, activity_id
            )));
        }

        self.insert_registration(&user, &activity)
    }

    fn insert_registration(&self, user: &User, activity: &Activity) -> Result<Registration> {
        let registration = Registration::new(
            self.ids.entity_id("reg"),
            user.id.clone(),
            activity.id.clone(),
            self.clock.now(),
        );
        self.store.upsert_registration(&registration)?;

        tracing::info!(
            user_id = %user.id,
            activity_id = %activity.id,
            registration_id = %registration.id,
            "Registered for activity"
        );
        Ok(registration)
    }

    /// Leave an activity; deletes the registration record entirely.
    ///
    /// Disallowed once attendance is confirmed, which protects point-award
    /// integrity, and disallowed once the activity has started.
    pub fn unregister(&self, user_id: &str, activity_id: &str) -> Result<()> {
        let activity = self.load_activity(activity_id)?;
        let registration = self
            .store
            .find_registration(user_id, activity_id)?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "registration for user {} and activity {}",
                    user_id, activity_id
                ))
            })?;

        if registration.state.attendance_confirmed() {
            return Err(AppError::InvalidTransition(format!(
                "registration {} has confirmed attendance and cannot be removed",
                registration.id
            )));
        }
        self.ensure_joinable(&activity)?;

        self.store.delete_registration(&registration.id)?;
        tracing::info!(
            user_id,
            activity_id,
            registration_id = %registration.id,
            "Unregistered from activity"
        );
        Ok(())
    }

    /// Confirm attendance: stamps the attendance time, unlocks feedback
    /// immediately, and grants the attendance bonus exactly once.
    ///
    /// Replaying an already-successful confirmation is a safe no-op that
    /// returns the stored registration unchanged. Confirmation requires the
    /// activity to have started.
    pub fn confirm_attendance(&self, user_id: &str, activity_id: &str) -> Result<Registration> {
        let activity = self.load_activity(activity_id)?;
        let mut registration = self
            .store
            .find_registration(user_id, activity_id)?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "registration for user {} and activity {}",
                    user_id, activity_id
                ))
            })?;

        if registration.state.attendance_confirmed() {
            return Ok(registration);
        }

        if self.window_of(&activity) == ActivityWindow::Upcoming {
            return Err(AppError::OutOfWindow(ActivityWindow::Upcoming));
        }

        Self::advance(&mut registration, RegistrationState::Attended)?;
        Self::advance(&mut registration, RegistrationState::FeedbackUnlocked)?;
        registration.attendance_time = Some(self.clock.now());

        let award_bonus = !registration.points_awarded;
        registration.points_awarded = true;
        self.store.upsert_registration(&registration)?;

        if award_bonus {
            self.rewards
                .award(user_id, ATTENDANCE_POINTS, "attended activity")?;
        }

        tracing::info!(
            user_id,
            activity_id,
            registration_id = %registration.id,
            "Attendance confirmed"
        );
        Ok(registration)
    }

    /// Submit the post-activity survey and grant the feedback bonus once.
    ///
    /// Valid only while feedback is unlocked and not yet completed;
    /// re-submission is rejected, never double-counted.
    pub fn submit_feedback(
        &self,
        user_id: &str,
        activity_id: &str,
        enjoyment: u8,
        would_join_again: bool,
        comments: String,
    ) -> Result<Feedback> {
        let mut registration = self
            .store
            .find_registration(user_id, activity_id)?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "registration for user {} and activity {}",
                    user_id, activity_id
                ))
            })?;

        if registration.state == RegistrationState::FeedbackCompleted {
            return Err(AppError::InvalidTransition(format!(
                "feedback already submitted for registration {}",
                registration.id
            )));
        }
        if !registration.state.feedback_pending() {
            return Err(AppError::InvalidTransition(format!(
                "feedback is not unlocked for registration {}",
                registration.id
            )));
        }

        let feedback = Feedback::new(
            self.ids.entity_id("fb"),
            user_id.to_string(),
            activity_id.to_string(),
            enjoyment,
            would_join_again,
            comments,
            self.clock.now(),
        )?;
        self.store.upsert_feedback(&feedback)?;

        Self::advance(&mut registration, RegistrationState::FeedbackCompleted)?;
        self.store.upsert_registration(&registration)?;

        self.rewards
            .award(user_id, FEEDBACK_POINTS, "completed feedback survey")?;

        tracing::info!(
            user_id,
            activity_id,
            enjoyment,
            would_join_again,
            "Feedback submitted"
        );
        Ok(feedback)
    }

    /// Registrations with attendance confirmed and the survey still open.
    pub fn pending_feedback(&self, user_id: &str) -> Result<Vec<Registration>> {
        Ok(self
            .store
            .registrations_for_user(user_id)?
            .into_iter()
            .filter(|r| r.state.feedback_pending())
            .collect())
    }

    /// All registrations belonging to a user.
    pub fn registrations_for(&self, user_id: &str) -> Result<Vec<Registration>> {
        self.store.registrations_for_user(user_id)
    }
}
