//! Task management core types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-assigned task identifier
///
/// Uniqueness is the caller's responsibility; nothing here checks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub i64);

impl From<i64> for TaskId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Task status in the lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Waiting in the to-do list
    ToDo,
    /// On the in-progress stack
    InProgress,
    /// In the completed queue
    Completed,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TaskStatus::ToDo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        };
        f.write_str(label)
    }
}

/// Core task structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub description: String,
    pub due_date: NaiveDate,
    /// Kept in step with the holding container by the manager
    pub status: TaskStatus,
}

impl Task {
    pub fn new(
        id: TaskId,
        name: impl Into<String>,
        description: impl Into<String>,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            due_date,
            status: TaskStatus::ToDo,
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Task {}: {} ({}) - Due: {}",
            self.id,
            self.name,
            self.status,
            self.due_date.format("%Y-%m-%d")
        )
    }
}
