//! Persisted form of the list: a compact JSON array of [`UserRecord`].
//!
//! The format carries no schema version. Anything that fails to decode is
//! reported as [`CoreError::SnapshotDecode`] and the caller decides how to
//! recover.

use crate::{CoreError, Result as CoreResult, UserRecord};

/// Serializes the list, preserving order and omitting absent avatars.
pub fn encode(items: &[UserRecord]) -> CoreResult<String> {
    serde_json::to_string(items).map_err(|e| CoreError::snapshot_encode(e))
}

/// Parses a stored snapshot back into records.
pub fn decode(raw: &str) -> CoreResult<Vec<UserRecord>> {
    serde_json::from_str(raw).map_err(|e| CoreError::snapshot_decode(e))
}
