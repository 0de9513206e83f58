//! Persistence layer abstractions and the SQLite snapshot store.
//!
//! # Responsibility
//! - Define the whole-snapshot load/save contract the model layer uses.
//! - Isolate SQLite and serialization details from service orchestration.
//!
//! # Invariants
//! - `load` degrades to the empty list instead of surfacing storage
//!   failures; the session continues in memory.
//! - `save` replaces the previous snapshot atomically (single-key put).

pub mod snapshot_repo;

pub use snapshot_repo::{RepoError, RepoResult, SnapshotStore, SqliteSnapshotStore, SNAPSHOT_KEY};
