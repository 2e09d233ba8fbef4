use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use roster_remote::ClientError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ControllerError {
    #[error("Remote fetch failed: {source} {location}")]
    Remote {
        #[source]
        source: ClientError,
        location: ErrorLocation,
    },

    #[error("Remote source returned no users {location}")]
    EmptyFetch { location: ErrorLocation },

    #[error("List already booted {location}")]
    AlreadyBooted { location: ErrorLocation },
}

impl ControllerError {
    /// Creates Remote error at caller location.
    #[track_caller]
    pub fn remote(source: ClientError) -> Self {
        Self::Remote {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates EmptyFetch error at caller location.
    #[track_caller]
    pub fn empty_fetch() -> Self {
        Self::EmptyFetch {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates AlreadyBooted error at caller location.
    #[track_caller]
    pub fn already_booted() -> Self {
        Self::AlreadyBooted {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ClientError> for ControllerError {
    #[track_caller]
    fn from(source: ClientError) -> Self {
        Self::remote(source)
    }
}

pub type Result<T> = StdResult<T, ControllerError>;
