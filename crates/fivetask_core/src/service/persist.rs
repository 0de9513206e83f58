//! Fire-and-forget snapshot write scheduler.
//!
//! # Responsibility
//! - Own the dirty-signal -> durable-write pipeline on a worker thread.
//! - Keep the caller's mutation path free of storage latency.
//!
//! # Invariants
//! - Queued snapshots are coalesced to the most recent before writing;
//!   intermediate states may never hit the store, the latest always does
//!   unless the process dies first (accepted loss window).
//! - Save failures are logged, never surfaced; the in-memory model is the
//!   source of truth for the session.

use crate::model::Task;
use crate::repo::SnapshotStore;
use log::{debug, error, warn};
use std::sync::mpsc::{self, Sender};
use std::thread::JoinHandle;

/// Background writer for whole-list snapshots.
///
/// Construct with [`SnapshotScheduler::spawn`]; call
/// [`SnapshotScheduler::shutdown`] (or drop) to flush pending writes and
/// join the worker.
pub struct SnapshotScheduler {
    tx: Option<Sender<Vec<Task>>>,
    worker: Option<JoinHandle<()>>,
}

impl SnapshotScheduler {
    /// Moves `store` onto a worker thread and starts the write loop.
    pub fn spawn<S: SnapshotStore + Send + 'static>(store: S) -> Self {
        let (tx, rx) = mpsc::channel::<Vec<Task>>();

        let worker = std::thread::spawn(move || {
            while let Ok(mut snapshot) = rx.recv() {
                // Coalesce everything queued behind this one; only the
                // newest snapshot matters for replace-on-write storage.
                while let Ok(newer) = rx.try_recv() {
                    snapshot = newer;
                }

                match store.save(&snapshot) {
                    Ok(()) => debug!(
                        "event=snapshot_save module=persist status=ok tasks={}",
                        snapshot.len()
                    ),
                    Err(err) => {
                        error!("event=snapshot_save module=persist status=error error={err}")
                    }
                }
            }
        });

        Self {
            tx: Some(tx),
            worker: Some(worker),
        }
    }

    /// Queues a snapshot for writing. Never blocks on storage I/O.
    pub fn schedule(&self, snapshot: Vec<Task>) {
        let Some(tx) = &self.tx else {
            return;
        };
        if tx.send(snapshot).is_err() {
            warn!("event=snapshot_save module=persist status=error error_code=worker_gone");
        }
    }

    /// Flushes everything queued so far and joins the worker.
    pub fn shutdown(self) {
        // Drop handles the actual teardown.
    }
}

impl Drop for SnapshotScheduler {
    fn drop(&mut self) {
        // Closing the channel lets the worker drain remaining snapshots
        // and exit its recv loop.
        self.tx.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                error!("event=snapshot_save module=persist status=error error_code=worker_panic");
            }
        }
    }
}
