//! Task Manager - lifecycle orchestration
//!
//! Responsibilities:
//! - Own the three lifecycle containers
//! - Move tasks strictly forward: To Do -> In Progress -> Completed
//! - Keep each task's status in step with the container holding it

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use taskboard_core::{DisplayConfig, Task, TaskId, TaskStatus};
use taskboard_storage::{OrderedTaskList, TaskContainer, TaskQueue, TaskStack};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::render;

/// Transition notice
///
/// Neither variant is fatal: the board is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("Task with ID {0} not found in to-do list.")]
    NotFound(TaskId),

    #[error("No tasks in progress.")]
    NothingInProgress,
}

/// Successful lifecycle step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Added,
    Started,
    Completed,
}

impl Transition {
    pub fn verb(self) -> &'static str {
        match self {
            Transition::Added => "Added",
            Transition::Started => "Started",
            Transition::Completed => "Completed",
        }
    }
}

/// Owned copy of the whole board
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub todo: Vec<Task>,
    pub in_progress: Vec<Task>,
    pub completed: Vec<Task>,
}

impl BoardSnapshot {
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Task manager holding the to-do list, in-progress stack and completed queue
#[derive(Debug, Default)]
pub struct TaskManager {
    todo: OrderedTaskList,
    in_progress: TaskStack,
    completed: TaskQueue,
    display: DisplayConfig,
}

impl TaskManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(display: DisplayConfig) -> Self {
        Self {
            display,
            ..Self::default()
        }
    }

    /// Create a task in To Do and file it by due date
    pub fn add_task(
        &mut self,
        id: TaskId,
        name: impl Into<String>,
        description: impl Into<String>,
        due_date: NaiveDate,
    ) -> Task {
        let task = Task::new(id, name, description, due_date);
        let report = task.clone();
        self.todo.insert_ordered(task);

        info!(task_id = %report.id, due = %report.due_date, "Task added");
        report
    }

    /// Move a waiting task onto the in-progress stack
    pub fn start_task(&mut self, id: TaskId) -> Result<Task, TransitionError> {
        let Some(mut task) = self.todo.remove_by_id(id) else {
            warn!(task_id = %id, "Task not found in to-do list");
            return Err(TransitionError::NotFound(id));
        };

        debug_assert_eq!(task.status, TaskStatus::ToDo);
        task.status = TaskStatus::InProgress;
        let report = task.clone();
        self.in_progress.push(task);

        info!(task_id = %id, in_progress = self.in_progress.len(), "Task started");
        Ok(report)
    }

    /// Complete the most recently started task
    pub fn complete_task(&mut self) -> Result<Task, TransitionError> {
        let Some(mut task) = self.in_progress.pop() else {
            warn!("No tasks in progress");
            return Err(TransitionError::NothingInProgress);
        };

        debug_assert_eq!(task.status, TaskStatus::InProgress);
        task.status = TaskStatus::Completed;
        let report = task.clone();
        self.completed.enqueue(task);

        info!(task_id = %report.id, completed = self.completed.len(), "Task completed");
        Ok(report)
    }

    /// Formatted view of all three containers
    pub fn display_all(&self) -> String {
        debug!(
            todo = self.todo.len(),
            in_progress = self.in_progress.len(),
            completed = self.completed.len(),
            "Rendering board"
        );
        let containers: [&dyn TaskContainer; 3] = [&self.todo, &self.in_progress, &self.completed];
        render::render_board(&containers, &self.display)
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            todo: self.todo.iter().cloned().collect(),
            in_progress: self.in_progress.iter().cloned().collect(),
            completed: self.completed.iter().cloned().collect(),
        }
    }

    pub fn todo(&self) -> &OrderedTaskList {
        &self.todo
    }

    pub fn in_progress(&self) -> &TaskStack {
        &self.in_progress
    }

    pub fn completed(&self) -> &TaskQueue {
        &self.completed
    }

    pub fn display_config(&self) -> &DisplayConfig {
        &self.display
    }
}
