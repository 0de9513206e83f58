//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate model mutations, persistence scheduling and event tagging
//!   into use-case level APIs.
//! - Keep presentation layers decoupled from storage details.

pub mod persist;
pub mod task_service;

pub use persist::SnapshotScheduler;
pub use task_service::TaskService;
