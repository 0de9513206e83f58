//! Remote replica client contract and HTTP implementation.
//!
//! # Responsibility
//! - Mirror the full task list to an optional remote replica.
//! - Keep replica transport details behind one trait seam.
//!
//! # Invariants
//! - `replace_tasks` is whole-list replacement; the remote side swaps its
//!   copy transactionally (delete-all then recreate), which is acceptable
//!   only because the domain is capacity-bounded.
//! - Replica failures are reported to the caller and never mutate local
//!   state.

use crate::model::Task;
use log::info;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

pub type ReplicaResult<T> = Result<T, ReplicaError>;

/// Replica transport and contract errors.
#[derive(Debug)]
pub enum ReplicaError {
    Transport(reqwest::Error),
    /// The replica answered but refused the request.
    Rejected(String),
    /// The replica answered with a body outside the contract.
    InvalidBody(String),
}

impl Display for ReplicaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "{err}"),
            Self::Rejected(reason) => write!(f, "replica rejected request: {reason}"),
            Self::InvalidBody(reason) => write!(f, "replica response invalid: {reason}"),
        }
    }
}

impl Error for ReplicaError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            Self::Rejected(_) | Self::InvalidBody(_) => None,
        }
    }
}

impl From<reqwest::Error> for ReplicaError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value)
    }
}

/// Full-replacement replica contract.
pub trait TaskReplica {
    /// Reads the replica's full current task list.
    fn fetch_tasks(&self) -> ReplicaResult<Vec<Task>>;

    /// Replaces the replica's entire task list with `tasks`.
    fn replace_tasks(&self, tasks: &[Task]) -> ReplicaResult<()>;
}

#[derive(Debug, Deserialize)]
struct ReplaceAck {
    success: bool,
}

/// HTTP replica speaking the `GET /tasks` / `POST /tasks` contract.
pub struct HttpTaskReplica {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpTaskReplica {
    /// Builds a client for a replica rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> ReplicaResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    fn tasks_url(&self) -> String {
        format!("{}/tasks", self.base_url)
    }
}

impl TaskReplica for HttpTaskReplica {
    fn fetch_tasks(&self) -> ReplicaResult<Vec<Task>> {
        let response = self.client.get(self.tasks_url()).send()?;
        if !response.status().is_success() {
            return Err(ReplicaError::Rejected(format!(
                "status {}",
                response.status()
            )));
        }

        let tasks: Vec<Task> = response
            .json()
            .map_err(|err| ReplicaError::InvalidBody(err.to_string()))?;
        info!(
            "event=replica_pull module=sync status=ok tasks={}",
            tasks.len()
        );
        Ok(tasks)
    }

    fn replace_tasks(&self, tasks: &[Task]) -> ReplicaResult<()> {
        let response = self.client.post(self.tasks_url()).json(&tasks).send()?;
        if !response.status().is_success() {
            return Err(ReplicaError::Rejected(format!(
                "status {}",
                response.status()
            )));
        }

        let ack: ReplaceAck = response
            .json()
            .map_err(|err| ReplicaError::InvalidBody(err.to_string()))?;
        if !ack.success {
            return Err(ReplicaError::Rejected(
                "replica reported success=false".to_string(),
            ));
        }

        info!(
            "event=replica_push module=sync status=ok tasks={}",
            tasks.len()
        );
        Ok(())
    }
}
