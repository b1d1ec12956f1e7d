//! Ordered to-do list
//!
//! Singly linked chain kept in ascending due-date order. Tasks sharing a due
//! date stay in insertion order.

use std::fmt;

use taskboard_core::{Task, TaskId};

use crate::trait_::TaskContainer;

type Link = Option<Box<Node>>;

struct Node {
    task: Task,
    next: Link,
}

/// To-do list ordered by due date
#[derive(Default)]
pub struct OrderedTaskList {
    head: Link,
    len: usize,
}

impl OrderedTaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert after every task due on or before `task`'s date
    pub fn insert_ordered(&mut self, task: Task) {
        let due = task.due_date;
        let slot = self.seek_mut(|existing| existing.due_date > due);
        let next = slot.take();
        *slot = Some(Box::new(Node { task, next }));
        self.len += 1;
    }

    /// Unlink and return the first task with `id`
    ///
    /// `None` means no such task is waiting; the list is left untouched.
    pub fn remove_by_id(&mut self, id: TaskId) -> Option<Task> {
        let slot = self.seek_mut(|existing| existing.id == id);
        let mut node = slot.take()?;
        *slot = node.next.take();
        self.len -= 1;
        Some(node.task)
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.iter().any(|task| task.id == id)
    }

    /// Tasks in due-date order
    pub fn list_all(&self) -> Vec<&Task> {
        self.iter().collect()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Walk to the first link whose task satisfies `stop`, or the tail link
    fn seek_mut<F>(&mut self, stop: F) -> &mut Link
    where
        F: Fn(&Task) -> bool,
    {
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| !stop(&node.task)) {
            if let Some(node) = cursor {
                cursor = &mut node.next;
            }
        }
        cursor
    }
}

impl Drop for OrderedTaskList {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl fmt::Debug for OrderedTaskList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl TaskContainer for OrderedTaskList {
    fn label(&self) -> &'static str {
        "To-Do Tasks (ordered by date)"
    }

    fn empty_notice(&self) -> &'static str {
        "To-Do list is empty."
    }

    fn len(&self) -> usize {
        self.len
    }

    fn snapshot(&self) -> Vec<&Task> {
        self.list_all()
    }
}

/// Borrowing iterator over an [`OrderedTaskList`]
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Task;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.task
        })
    }
}

impl<'a> IntoIterator for &'a OrderedTaskList {
    type Item = &'a Task;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
