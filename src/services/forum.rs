// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Community forum: categorized posts, replies, and like toggling.

use std::sync::Arc;

use crate::clock::Clock;
use crate::error::{AppError, Result};
use crate::ids::IdGen;
use crate::models::{ForumPost, ForumReply};
use crate::store::EntityStore;

/// Forum operations over the posts collection.
#[derive(Clone)]
pub struct ForumService {
    store: EntityStore,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGen>,
}

impl ForumService {
    pub fn new(store: EntityStore, clock: Arc<dyn Clock>, ids: Arc<dyn IdGen>) -> Self {
        Self { store, clock, ids }
    }

    fn ensure_user(&self, user_id: &str) -> Result<()> {
        if self.store.get_user(user_id)?.is_none() {
            return Err(AppError::NotFound(format!("user {}", user_id)));
        }
        Ok(())
    }

    /// Posts, optionally restricted to a category, newest first.
    pub fn list_posts(&self, category: Option<&str>) -> Result<Vec<ForumPost>> {
        let mut posts = self.store.list_forum_posts()?;
        if let Some(category) = category {
            posts.retain(|p| p.category == category);
        }
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    pub fn get_post(&self, post_id: &str) -> Result<ForumPost> {
        self.store
            .get_forum_post(post_id)?
            .ok_or_else(|| AppError::NotFound(format!("forum post {}", post_id)))
    }

    pub fn create_post(
        &self,
        user_id: &str,
        category: &str,
        title: &str,
        content: &str,
    ) -> Result<ForumPost> {
        self.ensure_user(user_id)?;

        let post = ForumPost::new(
            self.ids.entity_id("post"),
            user_id.to_string(),
            category.to_string(),
            title.to_string(),
            content.to_string(),
            self.clock.now(),
        );
        self.store.upsert_forum_post(&post)?;

        tracing::info!(user_id, post_id = %post.id, category, "Forum post created");
        Ok(post)
    }

    pub fn add_reply(&self, post_id: &str, user_id: &str, content: &str) -> Result<ForumReply> {
        self.ensure_user(user_id)?;
        let mut post = self.get_post(post_id)?;

        let reply = ForumReply {
            id: self.ids.entity_id("reply"),
            user_id: user_id.to_string(),
            content: content.to_string(),
            created_at: self.clock.now(),
            likes: 0,
        };
        post.replies.push(reply.clone());
        self.store.upsert_forum_post(&post)?;

        Ok(reply)
    }

    /// Like or unlike a post; returns the new like count.
    pub fn toggle_like(&self, post_id: &str, user_id: &str) -> Result<u32> {
        self.ensure_user(user_id)?;
        let mut post = self.get_post(post_id)?;

        match post.liked_by.iter().position(|id| id == user_id) {
            Some(index) => {
                post.liked_by.remove(index);
                post.likes = post.likes.saturating_sub(1);
            }
            None => {
                post.liked_by.push(user_id.to_string());
                post.likes += 1;
            }
        }

        self.store.upsert_forum_post(&post)?;
        Ok(post.likes)
    }
}
