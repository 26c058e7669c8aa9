// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types shared by every core operation.

use crate::models::ActivityWindow;

/// Application error type returned by all core operations.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error("Insufficient points: have {balance}, need {required}")]
    InsufficientPoints { balance: u64, required: u64 },

    #[error("Activity is {0}, outside the permitted window")]
    OutOfWindow(ActivityWindow),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Short machine-readable code for UI collaborators.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "not_found",
            AppError::InvalidTransition(_) => "invalid_transition",
            AppError::InsufficientPoints { .. } => "insufficient_points",
            AppError::OutOfWindow(_) => "out_of_window",
            AppError::BadRequest(_) => "bad_request",
            AppError::Storage(_) => "storage_error",
            AppError::Internal(_) => "internal_error",
        }
    }
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, AppError>;
