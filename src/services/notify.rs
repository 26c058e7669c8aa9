// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Notification generation and feed management.
//!
//! Interest-match alerts are derived from the activity catalog and
//! deduplicated per user over a 24-hour window. Health alerts bypass the
//! dedup rule and are pushed synchronously by the health service.

use std::sync::Arc;

use chrono::Duration;

use crate::clock::Clock;
use crate::error::{AppError, Result};
use crate::ids::IdGen;
use crate::models::notification::MAX_NOTIFICATIONS_PER_USER;
use crate::models::{Notification, NotificationKind};
use crate::store::EntityStore;

/// Catalog look-ahead for interest matches: today through +3 days.
pub const INTEREST_LOOKAHEAD_DAYS: i64 = 3;
/// No second interest-match notification within this many hours.
pub const INTEREST_DEDUP_HOURS: i64 = 24;
/// At most this many activity names are quoted in the aggregate message.
const SAMPLE_NAMES: usize = 3;

/// Generates and stores user-scoped notifications.
#[derive(Clone)]
pub struct NotificationService {
    store: EntityStore,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGen>,
}

impl NotificationService {
    pub fn new(store: EntityStore, clock: Arc<dyn Clock>, ids: Arc<dyn IdGen>) -> Self {
        Self { store, clock, ids }
    }

    /// Prepend a notification to the user's feed, trimming it to the
    /// [`MAX_NOTIFICATIONS_PER_USER`] most recent. Other users' feeds are
    /// left untouched.
    pub fn push(
        &self,
        user_id: &str,
        kind: NotificationKind,
        title: &str,
        message: &str,
    ) -> Result<Notification> {
        let notification = Notification::new(
            self.ids.entity_id("notif"),
            user_id.to_string(),
            kind,
            title.to_string(),
            message.to_string(),
            self.clock.now(),
        );

        let mut all = self.store.list_notifications()?;
        all.insert(0, notification.clone());

        let mut kept = 0usize;
        all.retain(|n| {
            if n.user_id == user_id {
                kept += 1;
                kept <= MAX_NOTIFICATIONS_PER_USER
            } else {
                true
            }
        });

        self.store.set_notifications(&all)?;
        Ok(notification)
    }

    /// Scan the catalog for upcoming interest matches and emit one aggregate
    /// notification, unless one was already emitted in the past 24 hours.
    ///
    /// Returns the notification if one was created.
    pub fn generate_interest_matches(&self, user_id: &str) -> Result<Option<Notification>> {
        let user = self
            .store
            .get_user(user_id)?
            .ok_or_else(|| AppError::NotFound(format!("user {}", user_id)))?;
        if user.interests.is_empty() {
            return Ok(None);
        }

        let today = self.clock.today();
        let horizon = today + Duration::days(INTEREST_LOOKAHEAD_DAYS);
        let matches: Vec<_> = self
            .store
            .list_activities()?
            .into_iter()
            .filter(|a| a.date >= today && a.date <= horizon && user.is_interested_in(&a.category))
            .collect();
        if matches.is_empty() {
            return Ok(None);
        }

        let cutoff = self.clock.now() - Duration::hours(INTEREST_DEDUP_HOURS);
        let has_recent = self.store.list_notifications()?.iter().any(|n| {
            n.user_id == user_id && n.kind == NotificationKind::InterestMatch && n.created_at > cutoff
        });
        if has_recent {
            return Ok(None);
        }

        let sample: Vec<&str> = matches
            .iter()
            .take(SAMPLE_NAMES)
            .map(|a| a.name.as_str())
            .collect();
        let message = format!(
            "{} activities matching your interests: {}",
            matches.len(),
            sample.join(", ")
        );

        let notification = self.push(
            user_id,
            NotificationKind::InterestMatch,
            "Activities for you",
            &message,
        )?;
        tracing::info!(user_id, matches = matches.len(), "Interest-match notification emitted");
        Ok(Some(notification))
    }

    /// A user's feed, newest first.
    pub fn list_for(&self, user_id: &str) -> Result<Vec<Notification>> {
        Ok(self
            .store
            .list_notifications()?
            .into_iter()
            .filter(|n| n.user_id == user_id)
            .collect())
    }

    pub fn unread_count(&self, user_id: &str) -> Result<usize> {
        Ok(self.list_for(user_id)?.iter().filter(|n| !n.read).count())
    }

    pub fn mark_read(&self, notification_id: &str) -> Result<()> {
        let mut notification = self
            .store
            .list_notifications()?
            .into_iter()
            .find(|n| n.id == notification_id)
            .ok_or_else(|| AppError::NotFound(format!("notification {}", notification_id)))?;

        notification.read = true;
        self.store.upsert_notification(&notification)
    }
}
