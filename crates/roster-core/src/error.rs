use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Failed to encode list snapshot: {source} {location}")]
    SnapshotEncode {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Failed to decode list snapshot: {source} {location}")]
    SnapshotDecode {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Creates SnapshotEncode error at caller location.
    #[track_caller]
    pub fn snapshot_encode(source: serde_json::Error) -> Self {
        Self::SnapshotEncode {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates SnapshotDecode error at caller location.
    #[track_caller]
    pub fn snapshot_decode(source: serde_json::Error) -> Self {
        Self::SnapshotDecode {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
