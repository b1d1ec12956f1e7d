// Taskboard Storage Layer
//
// Linked containers holding tasks for each lifecycle stage

pub mod ordered;
pub mod queue;
pub mod stack;
pub mod trait_;

pub use ordered::OrderedTaskList;
pub use queue::TaskQueue;
pub use stack::TaskStack;
pub use trait_::*;

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDate;
    use taskboard_core::{Task, TaskId};

    pub fn task(id: i64, month: u32, day: u32) -> Task {
        let due = NaiveDate::from_ymd_opt(2024, month, day).unwrap();
        Task::new(TaskId(id), format!("task-{id}"), "", due)
    }

    pub fn ids<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Vec<TaskId> {
        tasks.into_iter().map(|t| t.id).collect()
    }
}
