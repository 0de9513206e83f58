//! Core domain logic for the five-task tracker.
//! This crate is the single source of truth for the list invariants.

pub mod db;
pub mod exchange;
pub mod logging;
pub mod model;
pub mod mood;
pub mod repo;
pub mod service;
pub mod sync;

pub use exchange::{export_snapshot, export_to_dir, import_snapshot, ExportError, ImportError};
pub use logging::{default_log_level, init_logging};
pub use model::{
    HighlightColor, KanbanColumn, ListError, ListResult, MoveDirection, Priority, SubTask,
    SubTaskId, Task, TaskEvent, TaskId, TaskList, CAPACITY,
};
pub use mood::{mood_for, pick_quote, Mood};
pub use repo::{RepoError, RepoResult, SnapshotStore, SqliteSnapshotStore};
pub use service::{SnapshotScheduler, TaskService};
pub use sync::{HttpTaskReplica, ReplicaError, ReplicaResult, TaskReplica};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
