//! Task and sub-task domain records.
//!
//! # Responsibility
//! - Define the snapshot shape shared by the store, import/export and the
//!   remote replica.
//! - Provide the kanban column state machine for sub-tasks.
//!
//! # Invariants
//! - `id` is stable and never reused for another task or sub-task.
//! - Wire field names follow the persisted snapshot layout (`createdAt`,
//!   `subTasks`, `highlightColor`), so snapshots written by any client
//!   version round-trip unchanged.
//! - A sub-task column only ever moves one step along todo -> doing -> done.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a top-level task.
pub type TaskId = Uuid;

/// Stable identifier for a sub-task within a board.
pub type SubTaskId = Uuid;

/// Urgency marker a user can pin on a task. Display-only metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    None,
    Attention,
    Urgent,
    Critical,
}

/// Accent color a user can pin on a task. Display-only metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightColor {
    #[default]
    None,
    Blue,
    Purple,
    Pink,
}

/// Workflow column for a sub-task.
///
/// The three columns form a linear state machine; transitions move exactly
/// one step and clamp at either end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KanbanColumn {
    Todo,
    Doing,
    Done,
}

/// Direction of a single-step column move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Next,
    Prev,
}

impl KanbanColumn {
    /// Returns the column one step in `direction`, clamped at either end.
    pub fn step(self, direction: MoveDirection) -> Self {
        match direction {
            MoveDirection::Next => match self {
                Self::Todo => Self::Doing,
                Self::Doing | Self::Done => Self::Done,
            },
            MoveDirection::Prev => match self {
                Self::Done => Self::Doing,
                Self::Doing | Self::Todo => Self::Todo,
            },
        }
    }
}

/// One step of a task, tracked through the three-column workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubTask {
    pub id: SubTaskId,
    pub text: String,
    pub column: KanbanColumn,
    /// Unix epoch milliseconds at creation. Informative only; board order
    /// is insertion order, not time order.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

impl SubTask {
    /// Creates a sub-task in the `todo` column with a generated stable ID.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            column: KanbanColumn::Todo,
            created_at: now_epoch_ms(),
        }
    }
}

/// A top-level to-do item.
///
/// Older snapshot layouts omitted `subTasks`, `priority` and
/// `highlightColor`; the serde defaults keep those imports readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    /// Unix epoch milliseconds at creation. Display order is list order,
    /// never sorted by this field.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
    #[serde(rename = "subTasks", default)]
    pub sub_tasks: Vec<SubTask>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(rename = "highlightColor", default)]
    pub highlight_color: HighlightColor,
}

impl Task {
    /// Creates a task with defaults and a generated stable ID.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            completed: false,
            created_at: now_epoch_ms(),
            sub_tasks: Vec::new(),
            priority: Priority::None,
            highlight_color: HighlightColor::None,
        }
    }
}

fn now_epoch_ms() -> i64 {
    Utc::now().timestamp_millis()
}
