//! List state controller.
//!
//! Owns the in-memory list of users and keeps it in step with the remote
//! source and the local store: load-or-fetch on boot, refresh-replace,
//! prepend on add, filter on remove, and a queued save after every change
//! once booted.

pub mod boot_outcome;
pub mod controller_settings;
pub mod error;
pub mod list_controller;
pub mod notifier;
pub mod persister;

#[cfg(test)]
mod tests;

pub use boot_outcome::BootOutcome;
pub use controller_settings::ControllerSettings;
pub use error::{ControllerError, Result as ControllerResult};
pub use list_controller::ListController;
pub use notifier::Notifier;
pub use persister::Persister;

/// Users fetched by a single add.
pub const ADD_COUNT: u32 = 1;

pub const ERROR_TITLE: &str = "Error";
pub const REFRESH_FAILED_MESSAGE: &str = "Failed to refresh users.";
pub const ADD_FAILED_MESSAGE: &str = "Failed to fetch a new user.";
