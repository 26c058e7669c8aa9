// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Community forum post and reply models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reply nested under a forum post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForumReply {
    pub id: String,
    pub user_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub likes: u32,
}

/// Top-level forum post, authored by one user, liked by many.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForumPost {
    pub id: String,
    pub user_id: String,
    /// Discussion category, e.g. `diabetes`, `heart`, `exercise`
    pub category: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Kept consistent with `liked_by.len()`
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub liked_by: Vec<String>,
    #[serde(default)]
    pub replies: Vec<ForumReply>,
}

impl ForumPost {
    pub fn new(
        id: String,
        user_id: String,
        category: String,
        title: String,
        content: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            category,
            title,
            content,
            created_at,
            likes: 0,
            liked_by: Vec::new(),
            replies: Vec::new(),
        }
    }
}
