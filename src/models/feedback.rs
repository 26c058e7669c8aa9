// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Post-activity feedback survey record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Enjoyment is a 1..=5 emoji scale in the UI.
pub const MIN_ENJOYMENT: u8 = 1;
pub const MAX_ENJOYMENT: u8 = 5;

/// One feedback record per completed registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub id: String,
    pub user_id: String,
    pub activity_id: String,
    /// Enjoyment score, 1..=5
    pub enjoyment: u8,
    pub would_join_again: bool,
    pub comments: String,
    pub submitted_at: DateTime<Utc>,
}

impl Feedback {
    /// Validated constructor; rejects out-of-scale enjoyment scores.
    pub fn new(
        id: String,
        user_id: String,
        activity_id: String,
        enjoyment: u8,
        would_join_again: bool,
        comments: String,
        submitted_at: DateTime<Utc>,
    ) -> Result<Self> {
        if !(MIN_ENJOYMENT..=MAX_ENJOYMENT).contains(&enjoyment) {
            return Err(AppError::BadRequest(format!(
                "enjoyment must be {}..={}, got {}",
                MIN_ENJOYMENT, MAX_ENJOYMENT, enjoyment
            )));
        }

        Ok(Self {
            id,
            user_id,
            activity_id,
            enjoyment,
            would_join_again,
            comments,
            submitted_at,
        })
    }
}
