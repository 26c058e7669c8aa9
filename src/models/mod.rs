// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod feedback;
pub mod forum;
pub mod notification;
pub mod registration;
pub mod user;

pub use activity::{Activity, ActivityWindow, ExertionType, Intensity};
pub use feedback::Feedback;
pub use forum::{ForumPost, ForumReply};
pub use notification::{Notification, NotificationKind};
pub use registration::{Registration, RegistrationState};
pub use user::{
    ActivityLevel, BloodPressureReading, BloodSugarKind, BloodSugarReading, Gender, User,
    VoucherRef, WeightReading,
};
