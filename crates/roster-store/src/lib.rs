//! Key-value persistence for the list snapshot.

pub(crate) mod error;
pub(crate) mod file_store;
pub(crate) mod local_store;
pub(crate) mod memory_store;


pub use error::{Result as StoreResult, StoreError};
pub use file_store::FileStore;
pub use local_store::LocalStore;
pub use memory_store::MemoryStore;

/// Extension given to every file written by [`FileStore`].
pub const FILE_EXTENSION: &str = "json";
