// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Points and rewards ledger.
//!
//! Awards are tied to lifecycle transitions (attendance, feedback) and are
//! always non-negative; the only deduction is voucher redemption, which is
//! threshold-gated so the balance can never go below zero.

use std::sync::Arc;

use crate::clock::Clock;
use crate::error::{AppError, Result};
use crate::ids::IdGen;
use crate::models::VoucherRef;
use crate::store::EntityStore;

/// Fixed bonus for confirmed attendance.
pub const ATTENDANCE_POINTS: u64 = 10;
/// Fixed bonus for a completed feedback survey.
pub const FEEDBACK_POINTS: u64 = 20;
/// Points deducted by one voucher redemption.
pub const VOUCHER_COST: u64 = 200;

/// Ledger over user point balances and voucher redemptions.
#[derive(Clone)]
pub struct RewardsLedger {
    store: EntityStore,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGen>,
}

impl RewardsLedger {
    pub fn new(store: EntityStore, clock: Arc<dyn Clock>, ids: Arc<dyn IdGen>) -> Self {
        Self { store, clock, ids }
    }

    /// Add `amount` points to the user's balance; returns the new balance.
    pub fn award(&self, user_id: &str, amount: u64, reason: &str) -> Result<u64> {
        let mut user = self
            .store
            .get_user(user_id)?
            .ok_or_else(|| AppError::NotFound(format!("user {}", user_id)))?;

        user.points = user.points.saturating_add(amount);
        self.store.upsert_user(&user)?;

        tracing::info!(user_id, amount, reason, balance = user.points, "Points awarded");
        Ok(user.points)
    }

    /// Current point balance.
    pub fn balance(&self, user_id: &str) -> Result<u64> {
        let user = self
            .store
            .get_user(user_id)?
            .ok_or_else(|| AppError::NotFound(format!("user {}", user_id)))?;
        Ok(user.points)
    }

    /// Redeem a voucher: deduct [`VOUCHER_COST`] and record the reference.
    ///
    /// The deduction and the reference are written together; only the most
    /// recent redemption is retained on the user.
    pub fn redeem_voucher(&self, user_id: &str) -> Result<VoucherRef> {
        let mut user = self
            .store
            .get_user(user_id)?
            .ok_or_else(|| AppError::NotFound(format!("user {}", user_id)))?;

        if user.points < VOUCHER_COST {
            return Err(AppError::InsufficientPoints {
                balance: user.points,
                required: VOUCHER_COST,
            });
        }

        let voucher = VoucherRef {
            reference: self.ids.voucher_ref(),
            redeemed_on: self.clock.today(),
        };

        user.points -= VOUCHER_COST;
        user.last_voucher = Some(voucher.clone());
        self.store.upsert_user(&user)?;

        tracing::info!(
            user_id,
            reference = %voucher.reference,
            balance = user.points,
            "Voucher redeemed"
        );
        Ok(voucher)
    }
}
