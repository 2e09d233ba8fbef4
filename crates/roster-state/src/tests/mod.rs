
use crate::{ControllerSettings, ListController, Notifier};

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use roster_core::UserRecord;
use roster_remote::{ClientError, ClientResult, RemoteSource};
use roster_store::{LocalStore, StoreError, StoreResult};

pub(crate) const KEY: &str = "@users_list";

pub(crate) fn user(id: &str) -> UserRecord {
    UserRecord::new(id, format!("First-{id}"), format!("Last-{id}"))
}

pub(crate) fn users(prefix: &str, count: usize) -> Vec<UserRecord> {
    (0..count).map(|n| user(&format!("{prefix}{n}"))).collect()
}

pub(crate) fn fetch_failure() -> ClientError {
    ClientError::status(503, "http://test/api/")
}

/// Remote source answering from a script; an exhausted script fails.
#[derive(Default)]
pub(crate) struct ScriptedRemote {
    responses: Mutex<VecDeque<ClientResult<Vec<UserRecord>>>>,
    calls: Mutex<Vec<u32>>,
}

impl ScriptedRemote {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn ok(self, items: Vec<UserRecord>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(items));
        self
    }

    pub(crate) fn fail(self) -> Self {
        self.responses.lock().unwrap().push_back(Err(fetch_failure()));
        self
    }

    pub(crate) fn calls(&self) -> Vec<u32> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RemoteSource for ScriptedRemote {
    async fn fetch_users(&self, count: u32) -> ClientResult<Vec<UserRecord>> {
        self.calls.lock().unwrap().push(count);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(fetch_failure()))
    }
}

/// Store recording every write, with switchable failures.
#[derive(Default)]
pub(crate) struct RecordingStore {
    stored: Mutex<Option<String>>,
    fail_reads: bool,
    fail_writes: bool,
    writes: Mutex<Vec<String>>,
}

impl RecordingStore {
    pub(crate) fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn with_stored(raw: &str) -> Self {
        Self {
            stored: Mutex::new(Some(raw.to_string())),
            ..Self::default()
        }
    }

    pub(crate) fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    pub(crate) fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub(crate) fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }

    pub(crate) fn last_written(&self) -> Option<Vec<UserRecord>> {
        self.writes()
            .last()
            .map(|raw| roster_core::snapshot::decode(raw).unwrap())
    }
}

#[async_trait]
impl LocalStore for RecordingStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        assert_eq!(key, KEY);
        if self.fail_reads {
            return Err(StoreError::file_read(
                PathBuf::from("/test"),
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            ));
        }
        Ok(self.stored.lock().unwrap().clone())
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        assert_eq!(key, KEY);
        self.writes.lock().unwrap().push(value.to_string());
        if self.fail_writes {
            return Err(StoreError::file_write(
                PathBuf::from("/test"),
                std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
            ));
        }
        *self.stored.lock().unwrap() = Some(value.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct RecordingNotifier {
    notes: Mutex<Vec<(String, String)>>,
}

impl RecordingNotifier {
    pub(crate) fn notes(&self) -> Vec<(String, String)> {
        self.notes.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify_error(&self, title: &str, message: &str) {
        self.notes
            .lock()
            .unwrap()
            .push((title.to_string(), message.to_string()));
    }
}

pub(crate) struct Harness {
    pub(crate) controller: ListController,
    pub(crate) remote: Arc<ScriptedRemote>,
    pub(crate) store: Arc<RecordingStore>,
    pub(crate) notifier: Arc<RecordingNotifier>,
}

pub(crate) fn harness(remote: ScriptedRemote, store: RecordingStore) -> Harness {
    let remote = Arc::new(remote);
    let store = Arc::new(store);
    let notifier = Arc::new(RecordingNotifier::default());

    let controller = ListController::new(
        remote.clone(),
        store.clone(),
        notifier.clone(),
        ControllerSettings::default(),
    );

    Harness {
        controller,
        remote,
        store,
        notifier,
    }
}

/// Boots from a stored list and forgets the boot-time remote calls.
pub(crate) async fn booted_with(items: &[UserRecord], remote: ScriptedRemote) -> Harness {
    let raw = roster_core::snapshot::encode(items).unwrap();
    let h = harness(remote, RecordingStore::with_stored(&raw));
    h.controller.boot().await.unwrap();
    h
}
