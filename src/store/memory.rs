// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory storage backend, the test double for the JSON-file store.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{AppError, Result};
use crate::store::StorageBackend;

/// Backend holding every collection in a process-local map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let data = self
            .data
            .lock()
            .map_err(|_| AppError::Storage("memory store poisoned".to_string()))?;
        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut data = self
            .data
            .lock()
            .map_err(|_| AppError::Storage("memory store poisoned".to_string()))?;
        data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        let mut data = self
            .data
            .lock()
            .map_err(|_| AppError::Storage("memory store poisoned".to_string()))?;
        data.remove(key);
        Ok(())
    }
}
