//! Snapshot store contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist the full task list as one serialized value under one key.
//! - Rehydrate the last successfully saved snapshot at startup.
//!
//! # Invariants
//! - `load` never raises: a missing row, unreadable JSON or a failed query
//!   all degrade to the empty list, with the failure logged.
//! - `save` is a single transactional put; readers never observe a partial
//!   snapshot.

use crate::db::DbError;
use crate::model::Task;
use log::warn;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Well-known key the current task list is stored under.
pub const SNAPSHOT_KEY: &str = "current_tasks";

pub type RepoResult<T> = Result<T, RepoError>;

/// Snapshot persistence errors. Only `save` paths surface these; `load`
/// converts them into the empty-list fallback.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Serialize(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "snapshot serialization failed: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Whole-snapshot load/save contract for the task list.
pub trait SnapshotStore {
    /// Returns the last successfully saved snapshot, or the empty list.
    fn load(&self) -> Vec<Task>;

    /// Persists the full snapshot, replacing any prior one atomically.
    fn save(&self, tasks: &[Task]) -> RepoResult<()>;
}

/// SQLite-backed snapshot store.
pub struct SqliteSnapshotStore {
    conn: Connection,
}

impl SqliteSnapshotStore {
    /// Wraps an opened connection (see `crate::db::open_db`).
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    fn read_body(&self) -> RepoResult<Option<String>> {
        let body = self
            .conn
            .query_row(
                "SELECT body FROM snapshots WHERE key = ?1;",
                params![SNAPSHOT_KEY],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(body)
    }
}

impl SnapshotStore for SqliteSnapshotStore {
    fn load(&self) -> Vec<Task> {
        let body = match self.read_body() {
            Ok(Some(body)) => body,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!("event=snapshot_load module=repo status=error error={err}");
                return Vec::new();
            }
        };

        match serde_json::from_str(&body) {
            Ok(tasks) => tasks,
            Err(err) => {
                warn!(
                    "event=snapshot_load module=repo status=error error_code=corrupt_body error={err}"
                );
                Vec::new()
            }
        }
    }

    fn save(&self, tasks: &[Task]) -> RepoResult<()> {
        let body = serde_json::to_string(tasks)?;
        self.conn.execute(
            "INSERT INTO snapshots (key, body, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                body = excluded.body,
                updated_at = excluded.updated_at;",
            params![SNAPSHOT_KEY, body],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{SnapshotStore, SqliteSnapshotStore, SNAPSHOT_KEY};
    use crate::db::open_db_in_memory;
    use crate::model::Task;
    use rusqlite::params;

    #[test]
    fn load_on_fresh_store_is_empty() {
        let store = SqliteSnapshotStore::new(open_db_in_memory().unwrap());
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = SqliteSnapshotStore::new(open_db_in_memory().unwrap());
        let tasks = vec![Task::new("alpha"), Task::new("beta")];

        store.save(&tasks).unwrap();
        assert_eq!(store.load(), tasks);
    }

    #[test]
    fn save_replaces_prior_snapshot() {
        let store = SqliteSnapshotStore::new(open_db_in_memory().unwrap());
        store.save(&[Task::new("old")]).unwrap();

        let newer = vec![Task::new("new")];
        store.save(&newer).unwrap();
        assert_eq!(store.load(), newer);
    }

    #[test]
    fn corrupt_body_degrades_to_empty_list() {
        let conn = open_db_in_memory().unwrap();
        conn.execute(
            "INSERT INTO snapshots (key, body) VALUES (?1, ?2);",
            params![SNAPSHOT_KEY, "{not json"],
        )
        .unwrap();

        let store = SqliteSnapshotStore::new(conn);
        assert!(store.load().is_empty());
    }
}
