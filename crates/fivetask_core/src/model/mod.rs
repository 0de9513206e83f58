//! Domain model for the five-task list.
//!
//! # Responsibility
//! - Define the task/sub-task records and the snapshot wire shape.
//! - Own every in-memory mutation and the invariants around it.
//!
//! # Invariants
//! - The task list never exceeds five elements.
//! - Identifiers are stable UUIDs and never reused after deletion.

pub mod event;
pub mod list;
pub mod task;

pub use event::TaskEvent;
pub use list::{ListError, ListResult, TaskList, CAPACITY};
pub use task::{
    HighlightColor, KanbanColumn, MoveDirection, Priority, SubTask, SubTaskId, Task, TaskId,
};
