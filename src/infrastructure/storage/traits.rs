//! Storage trait definitions

use async_trait::async_trait;

use crate::shared::errors::StorageError;

/// Durable key-value slot, the server-side counterpart of a browser's
/// local storage. Values are opaque strings.
#[async_trait]
pub trait SessionSlot: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
