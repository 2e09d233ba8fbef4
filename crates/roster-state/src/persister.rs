use std::sync::Arc;

use log::{debug, warn};
use roster_store::LocalStore;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

enum PersistCommand {
    Save(String),
    Flush(oneshot::Sender<()>),
}

/// Background writer for list snapshots.
///
/// Saves are queued without waiting and written one at a time in the order
/// they were queued. A failed write is logged and dropped; the next queued
/// snapshot is written as usual.
pub struct Persister {
    tx: mpsc::UnboundedSender<PersistCommand>,
    task: JoinHandle<()>,
}

impl Persister {
    /// Spawns the writer task. Must be called inside a Tokio runtime.
    pub fn spawn(store: Arc<dyn LocalStore>, key: String) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<PersistCommand>();

        let task = tokio::spawn(async move {
            while let Some(command) = rx.recv().await {
                match command {
                    PersistCommand::Save(snapshot) => match store.set(&key, &snapshot).await {
                        Ok(()) => debug!("Persisted list snapshot ({} bytes)", snapshot.len()),
                        Err(e) => warn!("Storage save error: {e}"),
                    },
                    PersistCommand::Flush(ack) => {
                        let _ = ack.send(());
                    }
                }
            }
            debug!("Persister stopped");
        });

        Self { tx, task }
    }

    /// Queues a snapshot write and returns immediately.
    pub fn enqueue(&self, snapshot: String) {
        if self.tx.send(PersistCommand::Save(snapshot)).is_err() {
            warn!("Persister is not running; snapshot dropped");
        }
    }

    /// Waits until every snapshot queued before this call has been attempted.
    pub async fn flush(&self) {
        let (ack_tx, ack_rx) = oneshot::channel();
        if self.tx.send(PersistCommand::Flush(ack_tx)).is_err() {
            return;
        }
        let _ = ack_rx.await;
    }

    /// Drains the queue and stops the writer task.
    pub async fn shutdown(self) {
        let Self { tx, task } = self;
        drop(tx);
        if let Err(e) = task.await {
            warn!("Persister task ended abnormally: {e}");
        }
    }
}
