//! Task list use-case service.
//!
//! # Responsibility
//! - Wrap every model mutation with snapshot scheduling and event tagging.
//! - Rehydrate the model from the store exactly once, at construction.
//!
//! # Invariants
//! - Rehydration happens before the first mutation is accepted.
//! - A snapshot write is scheduled after every successful mutation and
//!   never after a rejection.
//! - Mascot events are plain tagged values; the service performs no
//!   presentation side effects.

use crate::model::{
    HighlightColor, ListError, ListResult, MoveDirection, Priority, SubTask, SubTaskId, Task,
    TaskEvent, TaskId, TaskList,
};
use crate::repo::SnapshotStore;
use crate::service::persist::SnapshotScheduler;
use log::info;

/// Orchestrates the in-memory list, the write scheduler and the event
/// side-channel.
pub struct TaskService {
    list: TaskList,
    scheduler: SnapshotScheduler,
    events: Vec<TaskEvent>,
}

impl TaskService {
    /// Loads the last saved snapshot and takes ownership of the store.
    ///
    /// The store moves onto the write worker; from here on the in-memory
    /// list is authoritative and persistence is fire-and-forget.
    pub fn open<S: SnapshotStore + Send + 'static>(store: S) -> Self {
        let snapshot = store.load();
        info!(
            "event=service_open module=service status=ok tasks={}",
            snapshot.len()
        );

        Self {
            list: TaskList::from_snapshot(snapshot),
            scheduler: SnapshotScheduler::spawn(store),
            events: vec![TaskEvent::Welcome],
        }
    }

    /// Returns the tasks in display order.
    pub fn tasks(&self) -> &[Task] {
        self.list.tasks()
    }

    /// Hands out every event tagged since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<TaskEvent> {
        std::mem::take(&mut self.events)
    }

    /// Adds a task at the head of the list.
    ///
    /// Tags `Add` on success; a capacity rejection tags `Full` (the mascot
    /// reacts to the full list even though the model is unchanged).
    pub fn add(&mut self, text: &str) -> ListResult<Task> {
        match self.list.add(text) {
            Ok(task) => {
                let task = task.clone();
                self.events.push(TaskEvent::Add);
                self.persist();
                Ok(task)
            }
            Err(ListError::AtCapacity) => {
                self.events.push(TaskEvent::Full);
                Err(ListError::AtCapacity)
            }
            Err(err) => Err(err),
        }
    }

    /// Flips completion; tags `Complete` only on the open -> completed
    /// transition.
    pub fn toggle_complete(&mut self, id: TaskId) -> ListResult<Task> {
        let task = self.list.toggle_complete(id)?.clone();
        if task.completed {
            self.events.push(TaskEvent::Complete);
        }
        self.persist();
        Ok(task)
    }

    /// Deletes a task into the undo buffer; tags `Delete`.
    pub fn delete(&mut self, id: TaskId) -> ListResult<Task> {
        let removed = self.list.delete(id)?;
        self.events.push(TaskEvent::Delete);
        self.persist();
        Ok(removed)
    }

    /// Restores the most recent deletion if capacity allows.
    pub fn undo(&mut self) -> ListResult<Task> {
        let task = self.list.undo()?.clone();
        self.persist();
        Ok(task)
    }

    /// Replaces a task's text in place.
    pub fn edit(&mut self, id: TaskId, new_text: &str) -> ListResult<Task> {
        let task = self.list.edit(id, new_text)?.clone();
        self.persist();
        Ok(task)
    }

    /// Moves a task to a new position; out-of-range requests are no-ops.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        let moved = self.list.reorder(from, to);
        if moved {
            self.persist();
        }
        moved
    }

    /// Sets priority and highlight color together.
    pub fn set_attributes(
        &mut self,
        id: TaskId,
        priority: Priority,
        highlight_color: HighlightColor,
    ) -> ListResult<Task> {
        let task = self
            .list
            .set_attributes(id, priority, highlight_color)?
            .clone();
        self.persist();
        Ok(task)
    }

    /// Adds a sub-task to a parent's `todo` column.
    pub fn add_sub_task(&mut self, parent_id: TaskId, text: &str) -> ListResult<SubTask> {
        let sub = self.list.add_sub_task(parent_id, text)?.clone();
        self.persist();
        Ok(sub)
    }

    /// Moves a sub-task one column, clamped at either end.
    pub fn move_sub_task(&mut self, id: SubTaskId, direction: MoveDirection) -> ListResult<SubTask> {
        let sub = self.list.move_sub_task(id, direction)?.clone();
        self.persist();
        Ok(sub)
    }

    /// Removes a sub-task from its parent's board.
    pub fn delete_sub_task(&mut self, id: SubTaskId) -> ListResult<()> {
        self.list.delete_sub_task(id)?;
        self.persist();
        Ok(())
    }

    /// Replaces the entire list, e.g. after a validated import.
    ///
    /// All-or-nothing by construction: callers validate before handing the
    /// tasks over. Clears the undo buffer.
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.list = TaskList::from_snapshot(tasks);
        self.persist();
    }

    /// Flushes pending snapshot writes and stops the write worker.
    pub fn shutdown(self) {
        self.scheduler.shutdown();
    }

    fn persist(&self) {
        self.scheduler.schedule(self.list.snapshot());
    }
}
