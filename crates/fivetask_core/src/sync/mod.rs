//! Optional remote replica integration.
//!
//! The replica is an external collaborator with a two-endpoint contract;
//! failures here never touch the local model. The trait seam keeps the
//! core testable without a network.

pub mod replica;

pub use replica::{HttpTaskReplica, ReplicaError, ReplicaResult, TaskReplica};
