pub mod error;
pub mod models;
pub mod snapshot;

pub use error::{CoreError, Result};
pub use models::list_state::ListState;
pub use models::user_record::UserRecord;

#[cfg(test)]
mod tests;

/// Character shown in place of an avatar when the first name is empty.
pub const FALLBACK_INITIAL: char = '?';
