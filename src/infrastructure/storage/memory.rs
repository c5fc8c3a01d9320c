//! In-memory slot implementation

use async_trait::async_trait;
use dashmap::DashMap;

use super::SessionSlot;
use crate::shared::errors::StorageError;

/// In-memory slot for development and testing. Lost on restart.
#[derive(Debug, Default)]
pub struct MemorySessionSlot {
    entries: DashMap<String, String>,
}

impl MemorySessionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot pre-loaded with one entry, as if left behind by a previous run.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let slot = Self::new();
        slot.entries.insert(key.into(), value.into());
        slot
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

#[async_trait]
impl SessionSlot for MemorySessionSlot {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}
