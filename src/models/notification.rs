//! User-scoped notification model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's feed keeps only this many notifications.
pub const MAX_NOTIFICATIONS_PER_USER: usize = 20;

/// What produced a notification; drives the dedup rule for interest matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Welcome,
    InterestMatch,
    HealthAlert,
}

/// User-scoped notification, newest kept first in the stored collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

impl Notification {
    pub fn new(
        id: String,
        user_id: String,
        kind: NotificationKind,
        title: String,
        message: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            kind,
            title,
            message,
            created_at,
            read: false,
        }
    }
}
