//! In-memory artifact store

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;

use crate::{
    error::{StoreError, StoreResult},
    slot::Slot,
    store::ArtifactStore,
};

/// Slot values held in process memory; nothing survives a restart
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RwLock<HashMap<Slot, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, slot: Slot) -> bool {
        self.slots.read().contains_key(&slot)
    }
}

#[async_trait]
impl ArtifactStore for MemoryStore {
    async fn get_raw(&self, slot: Slot) -> StoreResult<Value> {
        self.slots
            .read()
            .get(&slot)
            .cloned()
            .ok_or(StoreError::NotFound { slot })
    }

    async fn put_raw(&self, slot: Slot, value: Value) -> StoreResult<()> {
        self.slots.write().insert(slot, value);
        Ok(())
    }
}
