// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity occurrence model and wall-clock window evaluation.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Physical demand of an activity: seated, standing, or walking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExertionType {
    Sit,
    Stand,
    Walk,
}

/// Exertion intensity, ordered low < moderate < high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Moderate,
    High,
}

impl Intensity {
    /// Ordinal rank compared against [`crate::models::ActivityLevel::capacity`].
    pub fn rank(self) -> u8 {
        match self {
            Intensity::Low => 1,
            Intensity::Moderate => 2,
            Intensity::High => 3,
        }
    }
}

/// Where an activity occurrence sits relative to the current wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityWindow {
    Upcoming,
    InProgress,
    Ended,
}

impl std::fmt::Display for ActivityWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ActivityWindow::Upcoming => "upcoming",
            ActivityWindow::InProgress => "in progress",
            ActivityWindow::Ended => "ended",
        };
        f.write_str(label)
    }
}

/// A single dated occurrence of a recurring activity.
///
/// Occurrences are immutable once generated for a date; the participant
/// counters are display-only and not enforced as a capacity limit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Unique per calendar occurrence, e.g. `games-2026-03-10`
    pub id: String,
    pub name: String,
    /// Category tag matched against user interests, e.g. `tai-chi`
    pub category: String,
    #[serde(rename = "type")]
    pub exertion: ExertionType,
    pub intensity: Intensity,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub end_time: NaiveTime,
    pub location: String,
    pub description: String,
    pub max_participants: u32,
    pub current_participants: u32,
    pub instructor: Option<String>,
}

impl Activity {
    /// Validated constructor; rejects occurrences that end before they start.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: String,
        name: String,
        category: String,
        exertion: ExertionType,
        intensity: Intensity,
        date: NaiveDate,
        time: NaiveTime,
        end_time: NaiveTime,
        location: String,
        description: String,
        max_participants: u32,
        instructor: Option<String>,
    ) -> Result<Self> {
        if end_time <= time {
            return Err(AppError::BadRequest(format!(
                "activity {} ends at {} before it starts at {}",
                id, end_time, time
            )));
        }

        Ok(Self {
            id,
            name,
            category,
            exertion,
            intensity,
            date,
            time,
            end_time,
            location,
            description,
            max_participants,
            current_participants: 0,
            instructor,
        })
    }

    /// Classify this occurrence against the current date and time of day.
    pub fn window(&self, today: NaiveDate, now: NaiveTime) -> ActivityWindow {
        if self.date < today {
            return ActivityWindow::Ended;
        }
        if self.date > today {
            return ActivityWindow::Upcoming;
        }
        if now >= self.end_time {
            ActivityWindow::Ended
        } else if now >= self.time {
            ActivityWindow::InProgress
        } else {
            ActivityWindow::Upcoming
        }
    }
}
