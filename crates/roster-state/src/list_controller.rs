use crate::{
    ADD_COUNT, ADD_FAILED_MESSAGE, BootOutcome, ControllerError, ControllerResult,
    ControllerSettings, ERROR_TITLE, Notifier, Persister, REFRESH_FAILED_MESSAGE,
};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{info, warn};
use roster_core::{ListState, UserRecord, snapshot};
use roster_remote::{ClientResult, RemoteSource};
use roster_store::LocalStore;

/// Sole owner and mutator of the user list.
///
/// Every method takes `&self`. The state lock is only held for the
/// synchronous part of an operation, never across a fetch or a store call,
/// so operations issued together interleave and the last one to finish
/// decides the list.
pub struct ListController {
    state: RwLock<ListState>,
    boot_started: AtomicBool,
    remote: Arc<dyn RemoteSource>,
    store: Arc<dyn LocalStore>,
    notifier: Arc<dyn Notifier>,
    settings: ControllerSettings,
    persister: Persister,
}

impl ListController {
    /// Builds an uninitialized controller. Must be called inside a Tokio runtime.
    pub fn new(
        remote: Arc<dyn RemoteSource>,
        store: Arc<dyn LocalStore>,
        notifier: Arc<dyn Notifier>,
        settings: ControllerSettings,
    ) -> Self {
        let persister = Persister::spawn(Arc::clone(&store), settings.storage_key.clone());

        Self {
            state: RwLock::new(ListState::new()),
            boot_started: AtomicBool::new(false),
            remote,
            store,
            notifier,
            settings,
            persister,
        }
    }

    /// Snapshot of the current list.
    pub fn items(&self) -> Vec<UserRecord> {
        self.read_state().items().to_vec()
    }

    pub fn len(&self) -> usize {
        self.read_state().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_state().is_empty()
    }

    pub fn is_bootstrapped(&self) -> bool {
        self.read_state().is_bootstrapped()
    }

    /// Establishes the initial list: stored snapshot if usable, else a fetch.
    ///
    /// A second call fails with [`ControllerError::AlreadyBooted`] and leaves
    /// the state alone. Every other path ends bootstrapped, including the one
    /// where nothing could be fetched.
    pub async fn boot(&self) -> ControllerResult<BootOutcome> {
        if self.boot_started.swap(true, Ordering::SeqCst) {
            return Err(ControllerError::already_booted());
        }

        if let Some(items) = self.load_stored().await {
            let count = items.len();
            let mut state = self.write_state();
            state.replace(items);
            state.mark_bootstrapped();
            info!("Restored {count} user(s) from storage");
            return Ok(BootOutcome::Restored { count });
        }

        match self.fetch_with_fallback().await {
            Ok(items) => {
                let count = items.len();
                let mut state = self.write_state();
                state.replace(items);
                state.mark_bootstrapped();
                self.persist(&state);
                info!("Fetched {count} user(s) on boot");
                Ok(BootOutcome::Fetched { count })
            }
            Err(e) => {
                self.write_state().mark_bootstrapped();
                warn!("Boot could not fetch users: {e}");
                Ok(BootOutcome::Unavailable {
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Replaces the whole list with a fresh page.
    ///
    /// On failure the list is untouched and the user is notified.
    pub async fn refresh(&self) -> ControllerResult<usize> {
        let fresh = match self.remote.fetch_users(self.settings.page_size).await {
            Ok(fresh) => fresh,
            Err(e) => {
                warn!("Refresh failed: {e}");
                self.notifier
                    .notify_error(ERROR_TITLE, REFRESH_FAILED_MESSAGE);
                return Err(ControllerError::remote(e));
            }
        };

        let mut state = self.write_state();
        state.replace(fresh);
        self.persist(&state);
        info!("Refreshed list with {} user(s)", state.len());
        Ok(state.len())
    }

    /// Fetches one user and puts it at the front of the list.
    ///
    /// The new id is not checked against existing ones.
    pub async fn add_one(&self) -> ControllerResult<UserRecord> {
        let fetched = match self.remote.fetch_users(ADD_COUNT).await {
            Ok(fetched) => fetched,
            Err(e) => {
                warn!("Add failed: {e}");
                self.notifier.notify_error(ERROR_TITLE, ADD_FAILED_MESSAGE);
                return Err(ControllerError::remote(e));
            }
        };

        let Some(record) = fetched.into_iter().next() else {
            warn!("Add failed: remote source returned no users");
            self.notifier.notify_error(ERROR_TITLE, ADD_FAILED_MESSAGE);
            return Err(ControllerError::empty_fetch());
        };

        let mut state = self.write_state();
        state.prepend(record.clone());
        self.persist(&state);
        info!("Added user {}", record.id);
        Ok(record)
    }

    /// Removes every record with `id`. Returns whether anything was removed;
    /// an unknown id is a no-op and queues no save.
    pub fn remove_by_id(&self, id: &str) -> bool {
        let mut state = self.write_state();
        let removed = state.remove_by_id(id);
        if removed {
            self.persist(&state);
            info!("Removed user {id}");
        }
        removed
    }

    /// Waits until every save queued so far has been attempted.
    pub async fn flush(&self) {
        self.persister.flush().await;
    }

    /// Drains pending saves and stops the background writer.
    pub async fn shutdown(self) {
        self.persister.shutdown().await;
    }

    /// Reads and decodes the stored snapshot. Any failure counts as "nothing stored".
    async fn load_stored(&self) -> Option<Vec<UserRecord>> {
        match self.store.get(&self.settings.storage_key).await {
            Ok(Some(raw)) if raw.trim().is_empty() => {
                info!("Stored list is empty, fetching fresh users");
                None
            }
            Ok(Some(raw)) => match snapshot::decode(&raw) {
                Ok(items) => Some(items),
                Err(e) => {
                    warn!("Stored list is corrupted, fetching fresh users: {e}");
                    None
                }
            },
            Ok(None) => {
                info!("No stored list, fetching fresh users");
                None
            }
            Err(e) => {
                warn!("Init error: {e}");
                None
            }
        }
    }

    /// One fetch, plus a single silent retry if it fails.
    async fn fetch_with_fallback(&self) -> ClientResult<Vec<UserRecord>> {
        match self.remote.fetch_users(self.settings.page_size).await {
            Ok(items) => Ok(items),
            Err(e) => {
                warn!("Initial fetch failed, trying once more: {e}");
                self.remote.fetch_users(self.settings.page_size).await
            }
        }
    }

    /// Queues a save of `state` if boot has completed.
    ///
    /// Callers hold the write guard, so the queue sees snapshots in mutation order.
    fn persist(&self, state: &ListState) {
        if !state.is_bootstrapped() {
            return;
        }

        match snapshot::encode(state.items()) {
            Ok(encoded) => self.persister.enqueue(encoded),
            Err(e) => warn!("Could not encode list for storage: {e}"),
        }
    }

    fn read_state(&self) -> RwLockReadGuard<'_, ListState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, ListState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
