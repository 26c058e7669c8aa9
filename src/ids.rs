// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Injected identifier generation.
//!
//! Record ids only need to be unique within a single profile, but generating
//! them through a capability keeps tests deterministic.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Generator for entity ids and voucher references.
pub trait IdGen {
    /// New id for a stored record, e.g. `reg_9f61...`.
    fn entity_id(&self, prefix: &str) -> String;

    /// New voucher redemption reference, e.g. `SK-4C7A2B`.
    fn voucher_ref(&self) -> String;
}

/// UUID-backed generator used by the real application.
#[derive(Debug, Clone, Default)]
pub struct UuidIdGen;

impl IdGen for UuidIdGen {
    fn entity_id(&self, prefix: &str) -> String {
        format!("{}_{}", prefix, Uuid::new_v4().simple())
    }

    fn voucher_ref(&self) -> String {
        let raw = Uuid::new_v4().simple().to_string().to_uppercase();
        format!("SK-{}", &raw[..6])
    }
}

/// Sequential generator for tests.
#[derive(Debug, Default)]
pub struct SequentialIdGen {
    counter: AtomicU64,
}

impl SequentialIdGen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGen for SequentialIdGen {
    fn entity_id(&self, prefix: &str) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{}_{:04}", prefix, n)
    }

    fn voucher_ref(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("SK-{:06}", n)
    }
}
