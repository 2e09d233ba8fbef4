//! Remote source of user profiles.
//!
//! Exposes the [`RemoteSource`] seam used by the list controller and the
//! reqwest-backed [`RandomUserClient`] that talks to a randomuser-style API.

pub(crate) mod error;
pub(crate) mod random_user_client;
pub(crate) mod raw_user;
pub(crate) mod remote_source;


pub use error::{ClientError, Result as ClientResult};
pub use random_user_client::RandomUserClient;
pub use raw_user::{RawEnvelope, RawLogin, RawName, RawPicture, RawUser, synthesize_id};
pub use remote_source::RemoteSource;

/// Fields requested through the `inc` query parameter.
pub const INCLUDED_FIELDS: &str = "login,name,picture";
/// Placeholder used when an entry has no first name.
pub const PLACEHOLDER_FIRST: &str = "First";
/// Placeholder used when an entry has no last name.
pub const PLACEHOLDER_LAST: &str = "Last";
