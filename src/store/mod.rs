// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Storage layer: a pluggable key-value backend plus a typed entity store.
//!
//! The backend persists whole JSON-serialized collections keyed by the
//! constants in [`collections`]. It performs no validation and enforces no
//! cross-entity rules; a key that was never written reads as an empty
//! collection.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::models::{Activity, Feedback, ForumPost, Notification, Registration, User};

/// Collection keys as constants.
pub mod collections {
    pub const USERS: &str = "users";
    pub const CURRENT_USER: &str = "current_user_id";
    pub const ACTIVITIES: &str = "activities";
    pub const REGISTRATIONS: &str = "registrations";
    pub const FEEDBACK: &str = "feedback";
    pub const NOTIFICATIONS: &str = "notifications";
    pub const FORUM_POSTS: &str = "forum_posts";
}

/// Raw persistence adapter: get/set/delete of whole serialized collections.
pub trait StorageBackend: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn delete(&self, key: &str) -> Result<()>;
}

/// Typed data access over a [`StorageBackend`].
///
/// Cheap to clone; all services share one underlying backend.
#[derive(Clone)]
pub struct EntityStore {
    backend: Arc<dyn StorageBackend>,
}

impl EntityStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// In-memory store for tests (offline mock).
    pub fn new_in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        match self.backend.get(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| AppError::Storage(format!("decode {}: {}", key, e))),
            None => Ok(Vec::new()),
        }
    }

    fn write<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let raw = serde_json::to_string(items)
            .map_err(|e| AppError::Storage(format!("encode {}: {}", key, e)))?;
        self.backend.set(key, &raw)
    }

    /// Replace the record with the same id, or append it.
    fn upsert<T, F>(&self, key: &str, record: T, same_id: F) -> Result<()>
    where
        T: Serialize + DeserializeOwned,
        F: Fn(&T) -> bool,
    {
        let mut items: Vec<T> = self.read(key)?;
        match items.iter_mut().find(|item| same_id(item)) {
            Some(slot) => *slot = record,
            None => items.push(record),
        }
        self.write(key, &items)
    }

    // ─── Users ───────────────────────────────────────────────────

    pub fn list_users(&self) -> Result<Vec<User>> {
        self.read(collections::USERS)
    }

    pub fn get_user(&self, user_id: &str) -> Result<Option<User>> {
        Ok(self.list_users()?.into_iter().find(|u| u.id == user_id))
    }

    pub fn upsert_user(&self, user: &User) -> Result<()> {
        let id = user.id.clone();
        self.upsert(collections::USERS, user.clone(), |u: &User| u.id == id)
    }

    // ─── Current user (profile selector) ─────────────────────────

    pub fn current_user_id(&self) -> Result<Option<String>> {
        self.backend.get(collections::CURRENT_USER)
    }

    pub fn set_current_user_id(&self, user_id: &str) -> Result<()> {
        self.backend.set(collections::CURRENT_USER, user_id)
    }

    pub fn clear_current_user_id(&self) -> Result<()> {
        self.backend.delete(collections::CURRENT_USER)
    }

    // ─── Activities ──────────────────────────────────────────────

    pub fn list_activities(&self) -> Result<Vec<Activity>> {
        self.read(collections::ACTIVITIES)
    }

    pub fn get_activity(&self, activity_id: &str) -> Result<Option<Activity>> {
        Ok(self
            .list_activities()?
            .into_iter()
            .find(|a| a.id == activity_id))
    }

    /// Bulk-replace the catalog; used by first-run seeding.
    pub fn set_activities(&self, activities: &[Activity]) -> Result<()> {
        self.write(collections::ACTIVITIES, activities)
    }

    // ─── Registrations ───────────────────────────────────────────

    pub fn list_registrations(&self) -> Result<Vec<Registration>> {
        self.read(collections::REGISTRATIONS)
    }

    pub fn registrations_for_user(&self, user_id: &str) -> Result<Vec<Registration>> {
        Ok(self
            .list_registrations()?
            .into_iter()
            .filter(|r| r.user_id == user_id)
            .collect())
    }

    pub fn find_registration(
        &self,
        user_id: &str,
        activity_id: &str,
    ) -> Result<Option<Registration>> {
        Ok(self
            .list_registrations()?
            .into_iter()
            .find(|r| r.user_id == user_id && r.activity_id == activity_id))
    }

    pub fn upsert_registration(&self, registration: &Registration) -> Result<()> {
        let id = registration.id.clone();
        self.upsert(
            collections::REGISTRATIONS,
            registration.clone(),
            |r: &Registration| r.id == id,
        )
    }

    pub fn delete_registration(&self, registration_id: &str) -> Result<()> {
        let mut items = self.list_registrations()?;
        items.retain(|r| r.id != registration_id);
        self.write(collections::REGISTRATIONS, &items)
    }

    // ─── Feedback ────────────────────────────────────────────────

    pub fn list_feedback(&self) -> Result<Vec<Feedback>> {
        self.read(collections::FEEDBACK)
    }

    pub fn upsert_feedback(&self, feedback: &Feedback) -> Result<()> {
        let id = feedback.id.clone();
        self.upsert(collections::FEEDBACK, feedback.clone(), |f: &Feedback| {
            f.id == id
        })
    }

    // ─── Notifications ───────────────────────────────────────────

    pub fn list_notifications(&self) -> Result<Vec<Notification>> {
        self.read(collections::NOTIFICATIONS)
    }

    pub fn set_notifications(&self, notifications: &[Notification]) -> Result<()> {
        self.write(collections::NOTIFICATIONS, notifications)
    }

    pub fn upsert_notification(&self, notification: &Notification) -> Result<()> {
        let id = notification.id.clone();
        self.upsert(
            collections::NOTIFICATIONS,
            notification.clone(),
            |n: &Notification| n.id == id,
        )
    }

    // ─── Forum ───────────────────────────────────────────────────

    pub fn list_forum_posts(&self) -> Result<Vec<ForumPost>> {
        self.read(collections::FORUM_POSTS)
    }

    pub fn get_forum_post(&self, post_id: &str) -> Result<Option<ForumPost>> {
        Ok(self
            .list_forum_posts()?
            .into_iter()
            .find(|p| p.id == post_id))
    }

    pub fn upsert_forum_post(&self, post: &ForumPost) -> Result<()> {
        let id = post.id.clone();
        self.upsert(collections::FORUM_POSTS, post.clone(), |p: &ForumPost| {
            p.id == id
        })
    }
}
