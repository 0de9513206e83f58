//! In-memory task list model and undo buffer.
//!
//! # Responsibility
//! - Own every mutation of the ordered task list and its sub-task boards.
//! - Enforce the five-task ceiling and the non-empty-text rule.
//!
//! # Invariants
//! - The list never exceeds `CAPACITY` elements.
//! - Every rejection leaves the model unchanged; there is no partial
//!   mutation.
//! - List order is authoritative for display and independent of
//!   `created_at`.
//! - Deleting a task discards its sub-tasks with it, atomically.

use crate::model::task::{MoveDirection, SubTask, SubTaskId, Task, TaskId};
use crate::model::{HighlightColor, Priority};
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Maximum number of concurrent top-level tasks.
pub const CAPACITY: usize = 5;

pub type ListResult<T> = Result<T, ListError>;

/// Rejection outcomes for task list and board mutations.
///
/// Every variant is recoverable and local; callers can branch on the
/// variant without inspecting model internals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// The list already holds `CAPACITY` tasks.
    AtCapacity,
    /// The supplied text was empty after trimming.
    EmptyText,
    /// No task with the given ID exists.
    TaskNotFound(TaskId),
    /// No sub-task with the given ID exists on any board.
    SubTaskNotFound(SubTaskId),
    /// Undo was requested with nothing in the buffer.
    BufferEmpty,
}

impl Display for ListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AtCapacity => write!(f, "task list is at capacity ({CAPACITY})"),
            Self::EmptyText => write!(f, "task text cannot be empty"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::SubTaskNotFound(id) => write!(f, "sub-task not found: {id}"),
            Self::BufferEmpty => write!(f, "undo buffer is empty"),
        }
    }
}

impl Error for ListError {}

/// Ordered collection of tasks plus the single-slot undo buffer.
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    last_deleted: Option<Task>,
}

impl TaskList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrates a list from a persisted or imported snapshot.
    ///
    /// Snapshots larger than `CAPACITY` should not exist, but an imported
    /// file can carry one; overflow is dropped rather than poisoning the
    /// capacity invariant for the rest of the session.
    pub fn from_snapshot(mut tasks: Vec<Task>) -> Self {
        if tasks.len() > CAPACITY {
            warn!(
                "event=snapshot_truncated module=model status=warn kept={CAPACITY} dropped={}",
                tasks.len() - CAPACITY
            );
            tasks.truncate(CAPACITY);
        }
        Self {
            tasks,
            last_deleted: None,
        }
    }

    /// Returns the tasks in display order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the task currently held by the undo buffer, if any.
    pub fn buffered_deletion(&self) -> Option<&Task> {
        self.last_deleted.as_ref()
    }

    /// Clones the current state as a persistable snapshot.
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    /// Adds a task at the head of the list.
    pub fn add(&mut self, text: &str) -> ListResult<&Task> {
        let text = non_empty(text)?;
        if self.tasks.len() >= CAPACITY {
            return Err(ListError::AtCapacity);
        }

        self.tasks.insert(0, Task::new(text));
        Ok(&self.tasks[0])
    }

    /// Flips the completed flag of one task.
    pub fn toggle_complete(&mut self, id: TaskId) -> ListResult<&Task> {
        let index = self.index_of(id)?;
        let task = &mut self.tasks[index];
        task.completed = !task.completed;
        Ok(&self.tasks[index])
    }

    /// Removes a task, cascading its sub-tasks, and fills the undo buffer.
    ///
    /// The buffer holds at most one task; a second deletion overwrites it.
    pub fn delete(&mut self, id: TaskId) -> ListResult<Task> {
        let index = self.index_of(id)?;
        let removed = self.tasks.remove(index);
        self.last_deleted = Some(removed.clone());
        Ok(removed)
    }

    /// Reinserts the buffered deletion at the head of the list.
    ///
    /// The buffer is cleared only on success; a capacity rejection keeps
    /// it, so the user can retry after freeing a slot.
    pub fn undo(&mut self) -> ListResult<&Task> {
        if self.last_deleted.is_none() {
            return Err(ListError::BufferEmpty);
        }
        if self.tasks.len() >= CAPACITY {
            return Err(ListError::AtCapacity);
        }

        if let Some(task) = self.last_deleted.take() {
            self.tasks.insert(0, task);
        }
        Ok(&self.tasks[0])
    }

    /// Replaces the text of one task in place.
    pub fn edit(&mut self, id: TaskId, new_text: &str) -> ListResult<&Task> {
        let new_text = non_empty(new_text)?;
        let index = self.index_of(id)?;
        self.tasks[index].text = new_text;
        Ok(&self.tasks[index])
    }

    /// Moves one task to a new position.
    ///
    /// Returns `false` without touching the list when the indices are
    /// equal or out of range; reordering is never an error.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        if from == to || from >= self.tasks.len() || to >= self.tasks.len() {
            return false;
        }

        let task = self.tasks.remove(from);
        self.tasks.insert(to, task);
        true
    }

    /// Sets priority and highlight color together.
    pub fn set_attributes(
        &mut self,
        id: TaskId,
        priority: Priority,
        highlight_color: HighlightColor,
    ) -> ListResult<&Task> {
        let index = self.index_of(id)?;
        let task = &mut self.tasks[index];
        task.priority = priority;
        task.highlight_color = highlight_color;
        Ok(&self.tasks[index])
    }

    /// Appends a sub-task to the parent's `todo` column.
    pub fn add_sub_task(&mut self, parent_id: TaskId, text: &str) -> ListResult<&SubTask> {
        let text = non_empty(text)?;
        let index = self.index_of(parent_id)?;
        let board = &mut self.tasks[index].sub_tasks;
        board.push(SubTask::new(text));
        let sub_index = board.len() - 1;
        Ok(&self.tasks[index].sub_tasks[sub_index])
    }

    /// Moves a sub-task one column along todo -> doing -> done.
    ///
    /// Moving past either end clamps in place; that is a successful no-op,
    /// not an error.
    pub fn move_sub_task(
        &mut self,
        id: SubTaskId,
        direction: MoveDirection,
    ) -> ListResult<&SubTask> {
        let (task_index, sub_index) = self.sub_index_of(id)?;
        let sub = &mut self.tasks[task_index].sub_tasks[sub_index];
        sub.column = sub.column.step(direction);
        Ok(&self.tasks[task_index].sub_tasks[sub_index])
    }

    /// Removes a sub-task from its parent's board.
    pub fn delete_sub_task(&mut self, id: SubTaskId) -> ListResult<()> {
        let (task_index, sub_index) = self.sub_index_of(id)?;
        self.tasks[task_index].sub_tasks.remove(sub_index);
        Ok(())
    }

    fn index_of(&self, id: TaskId) -> ListResult<usize> {
        self.tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(ListError::TaskNotFound(id))
    }

    fn sub_index_of(&self, id: SubTaskId) -> ListResult<(usize, usize)> {
        for (task_index, task) in self.tasks.iter().enumerate() {
            if let Some(sub_index) = task.sub_tasks.iter().position(|sub| sub.id == id) {
                return Ok((task_index, sub_index));
            }
        }
        Err(ListError::SubTaskNotFound(id))
    }
}

fn non_empty(text: &str) -> ListResult<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ListError::EmptyText);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::{ListError, TaskList, CAPACITY};
    use crate::model::task::Task;

    #[test]
    fn add_trims_text_and_inserts_at_head() {
        let mut list = TaskList::new();
        list.add("first").unwrap();
        let second = list.add("  second  ").unwrap();

        assert_eq!(second.text, "second");
        assert_eq!(list.tasks()[0].text, "second");
        assert_eq!(list.tasks()[1].text, "first");
    }

    #[test]
    fn from_snapshot_drops_overflow() {
        let tasks: Vec<Task> = (0..7).map(|n| Task::new(format!("task {n}"))).collect();
        let list = TaskList::from_snapshot(tasks);
        assert_eq!(list.len(), CAPACITY);
    }

    #[test]
    fn undo_keeps_buffer_when_at_capacity() {
        let mut list = TaskList::new();
        for n in 0..CAPACITY {
            list.add(&format!("task {n}")).unwrap();
        }
        let victim = list.tasks()[0].id;
        list.delete(victim).unwrap();
        list.add("replacement").unwrap();

        assert_eq!(list.undo(), Err(ListError::AtCapacity));
        assert!(list.buffered_deletion().is_some());
    }

    #[test]
    fn reorder_rejects_out_of_range_indices() {
        let mut list = TaskList::new();
        list.add("only").unwrap();

        assert!(!list.reorder(0, 0));
        assert!(!list.reorder(0, 3));
        assert!(!list.reorder(5, 0));
        assert_eq!(list.len(), 1);
    }
}
