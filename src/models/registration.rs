// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Registration lifecycle state.
//!
//! A registration moves strictly forward:
//! `Registered -> Attended -> FeedbackUnlocked -> FeedbackCompleted`.
//! Attendance confirmation advances through `Attended` straight to
//! `FeedbackUnlocked` because feedback opens immediately on confirmation.
//! The only way back is full unregistration, which deletes the record and is
//! only permitted before attendance is confirmed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a user's relationship to one activity occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationState {
    Registered,
    Attended,
    FeedbackUnlocked,
    FeedbackCompleted,
}

impl RegistrationState {
    /// Forward transition table; everything not listed is illegal.
    pub fn can_advance_to(self, next: RegistrationState) -> bool {
        use RegistrationState::*;
        matches!(
            (self, next),
            (Registered, Attended) | (Attended, FeedbackUnlocked) | (FeedbackUnlocked, FeedbackCompleted)
        )
    }

    pub fn attendance_confirmed(self) -> bool {
        !matches!(self, RegistrationState::Registered)
    }

    /// Feedback may be submitted exactly in this state.
    pub fn feedback_pending(self) -> bool {
        matches!(self, RegistrationState::FeedbackUnlocked)
    }
}

/// Link between a user and an activity occurrence.
///
/// Invariant: at most one registration per (user, activity) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    pub id: String,
    pub user_id: String,
    pub activity_id: String,
    pub registered_at: DateTime<Utc>,
    pub state: RegistrationState,
    /// Stamped when attendance is confirmed
    pub attendance_time: Option<DateTime<Utc>>,
    /// Guards the attendance bonus so replays never double-award
    pub points_awarded: bool,
}

impl Registration {
    pub fn new(
        id: String,
        user_id: String,
        activity_id: String,
        registered_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            activity_id,
            registered_at,
            state: RegistrationState::Registered,
            attendance_time: None,
            points_awarded: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use RegistrationState::*;

    #[test]
    fn test_transition_table_is_strictly_forward() {
        assert!(Registered.can_advance_to(Attended));
        assert!(Attended.can_advance_to(FeedbackUnlocked));
        assert!(FeedbackUnlocked.can_advance_to(FeedbackCompleted));

        // No skips, no self-loops, no reverse edges.
        assert!(!Registered.can_advance_to(FeedbackUnlocked));
        assert!(!Registered.can_advance_to(Registered));
        assert!(!Attended.can_advance_to(Registered));
        assert!(!FeedbackCompleted.can_advance_to(FeedbackUnlocked));
        assert!(!FeedbackCompleted.can_advance_to(Registered));
    }

    #[test]
    fn test_state_predicates() {
        assert!(!Registered.attendance_confirmed());
        assert!(Attended.attendance_confirmed());
        assert!(FeedbackUnlocked.attendance_confirmed());
        assert!(FeedbackCompleted.attendance_confirmed());

        assert!(FeedbackUnlocked.feedback_pending());
        assert!(!FeedbackCompleted.feedback_pending());
        assert!(!Registered.feedback_pending());
    }
}
