use crate::ClientResult;

use async_trait::async_trait;
use roster_core::UserRecord;

/// Supplier of freshly generated user records.
///
/// One call is one request: no retry, no partial results.
#[async_trait]
pub trait RemoteSource: Send + Sync {
    /// Fetch `count` users in the order the source returns them.
    async fn fetch_users(&self, count: u32) -> ClientResult<Vec<UserRecord>>;
}
