// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile management and the profile-selector "login".
//!
//! There is no authentication; the current user is just a selector key in
//! the store, as on a shared tablet at the centre.

use std::sync::Arc;

use crate::clock::Clock;
use crate::error::{AppError, Result};
use crate::ids::IdGen;
use crate::models::{ActivityLevel, Gender, NotificationKind, User};
use crate::services::notify::NotificationService;
use crate::store::EntityStore;

/// Attributes collected by the onboarding flow.
#[derive(Debug, Clone)]
pub struct NewUserProfile {
    pub name: String,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub has_mobility_issue: bool,
    pub interests: Vec<String>,
}

/// Partial profile update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub activity_level: Option<ActivityLevel>,
    pub has_mobility_issue: Option<bool>,
    pub interests: Option<Vec<String>>,
}

/// User creation, selection and updates.
#[derive(Clone)]
pub struct ProfileService {
    store: EntityStore,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGen>,
    notifications: NotificationService,
}

impl ProfileService {
    pub fn new(
        store: EntityStore,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGen>,
        notifications: NotificationService,
    ) -> Self {
        Self {
            store,
            clock,
            ids,
            notifications,
        }
    }

    /// Create a member profile, make it the current user, and send the
    /// welcome notification.
    pub fn create_user(&self, profile: NewUserProfile) -> Result<User> {
        let user = User::new(
            self.ids.entity_id("user"),
            profile.name,
            profile.gender,
            profile.activity_level,
            profile.has_mobility_issue,
            profile.interests,
            self.clock.today(),
        );

        self.store.upsert_user(&user)?;
        self.store.set_current_user_id(&user.id)?;
        self.notifications.push(
            &user.id,
            NotificationKind::Welcome,
            "Welcome to SilverKaki!",
            "Start by exploring activities and joining ones you like!",
        )?;

        tracing::info!(user_id = %user.id, name = %user.name, "User created");
        Ok(user)
    }

    /// Select an existing profile and refresh its interest matches.
    pub fn switch_user(&self, user_id: &str) -> Result<User> {
        let user = self
            .store
            .get_user(user_id)?
            .ok_or_else(|| AppError::NotFound(format!("user {}", user_id)))?;

        self.store.set_current_user_id(user_id)?;
        self.notifications.generate_interest_matches(user_id)?;

        tracing::info!(user_id, "Switched profile");
        Ok(user)
    }

    pub fn current_user(&self) -> Result<Option<User>> {
        match self.store.current_user_id()? {
            Some(id) => self.store.get_user(&id),
            None => Ok(None),
        }
    }

    pub fn logout(&self) -> Result<()> {
        self.store.clear_current_user_id()
    }

    pub fn list_users(&self) -> Result<Vec<User>> {
        self.store.list_users()
    }

    /// Apply a partial update to an existing profile.
    pub fn update_profile(&self, user_id: &str, update: ProfileUpdate) -> Result<User> {
        let mut user = self
            .store
            .get_user(user_id)?
            .ok_or_else(|| AppError::NotFound(format!("user {}", user_id)))?;

        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(level) = update.activity_level {
            user.activity_level = level;
        }
        if let Some(flag) = update.has_mobility_issue {
            user.has_mobility_issue = flag;
        }
        if let Some(interests) = update.interests {
            user.interests = interests;
        }

        self.store.upsert_user(&user)?;
        Ok(user)
    }
}
