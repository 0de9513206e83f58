//! Categorical events emitted by the model layer.
//!
//! The model tags each notable outcome with one of these values; the
//! presentation layer maps them to mascot mood/quote pairs (`crate::mood`).
//! The core never depends on that mapping.

use serde::{Deserialize, Serialize};

/// Outcome category for the mascot side-channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskEvent {
    /// First load of the session completed.
    Welcome,
    /// A task was added.
    Add,
    /// A task transitioned from open to completed.
    Complete,
    /// A task was deleted.
    Delete,
    /// An add was rejected because the list is at capacity.
    Full,
    /// The user has been inactive; emitted by the presentation layer timer.
    Idle,
}
