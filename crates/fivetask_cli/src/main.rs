//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `fivetask_core` linkage and
//!   store bootstrap.
//! - Keep output deterministic for quick local sanity checks.

use fivetask_core::db::open_db_in_memory;
use fivetask_core::{SqliteSnapshotStore, TaskService};

fn main() {
    println!("fivetask_core version={}", fivetask_core::core_version());

    match open_db_in_memory() {
        Ok(conn) => {
            let mut service = TaskService::open(SqliteSnapshotStore::new(conn));
            println!("store=ok tasks={}", service.tasks().len());
            println!("events={}", service.drain_events().len());
            service.shutdown();
        }
        Err(err) => println!("store=error {err}"),
    }
}
