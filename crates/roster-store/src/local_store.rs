use crate::StoreResult;

use async_trait::async_trait;

/// String key-value storage surviving process restarts.
#[async_trait]
pub trait LocalStore: Send + Sync {
    /// Returns `Ok(None)` when nothing has been stored under `key`.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}
