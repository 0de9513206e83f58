use fivetask_core::db::open_db;
use fivetask_core::{SnapshotStore, SqliteSnapshotStore, Task, TaskService};
use tempfile::TempDir;

fn file_store(dir: &TempDir) -> SqliteSnapshotStore {
    let conn = open_db(dir.path().join("tasks.db")).unwrap();
    SqliteSnapshotStore::new(conn)
}

#[test]
fn on_disk_round_trip_is_deep_equal() {
    let dir = TempDir::new().unwrap();

    let mut parent = Task::new("with board");
    parent.completed = true;
    let mut tasks = vec![parent, Task::new("plain")];
    tasks[0].sub_tasks.push(fivetask_core::SubTask::new("a"));
    tasks[0].sub_tasks.push(fivetask_core::SubTask::new("b"));

    file_store(&dir).save(&tasks).unwrap();

    // A fresh connection must see exactly what was saved.
    assert_eq!(file_store(&dir).load(), tasks);
}

#[test]
fn empty_list_round_trips_too() {
    let dir = TempDir::new().unwrap();
    file_store(&dir).save(&[]).unwrap();
    assert!(file_store(&dir).load().is_empty());
}

#[test]
fn service_flushes_writes_on_shutdown() {
    let dir = TempDir::new().unwrap();

    let mut service = TaskService::open(file_store(&dir));
    service.add("persisted one").unwrap();
    let kept = service.add("persisted two").unwrap();
    service.add_sub_task(kept.id, "step").unwrap();
    service.shutdown();

    let reloaded = TaskService::open(file_store(&dir));
    let tasks = reloaded.tasks();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].id, kept.id);
    assert_eq!(tasks[0].sub_tasks.len(), 1);
    assert_eq!(tasks[1].text, "persisted one");
    reloaded.shutdown();
}

#[test]
fn rejected_mutations_do_not_dirty_the_store() {
    let dir = TempDir::new().unwrap();

    let mut service = TaskService::open(file_store(&dir));
    assert!(service.add("   ").is_err());
    service.shutdown();

    // Nothing was ever scheduled, so the store still has no snapshot.
    assert!(file_store(&dir).load().is_empty());
}

#[test]
fn latest_scheduled_snapshot_wins() {
    let dir = TempDir::new().unwrap();

    let mut service = TaskService::open(file_store(&dir));
    let id = service.add("draft").unwrap().id;
    service.edit(id, "edited once").unwrap();
    service.edit(id, "edited twice").unwrap();
    service.shutdown();

    let loaded = file_store(&dir).load();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].text, "edited twice");
}
