//! In-progress stack (LIFO)

use std::fmt;

use taskboard_core::Task;

use crate::trait_::TaskContainer;

type Link = Option<Box<Node>>;

struct Node {
    task: Task,
    next: Link,
}

/// Tasks being worked on, most recently started on top
#[derive(Default)]
pub struct TaskStack {
    head: Link,
    len: usize,
}

impl TaskStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, task: Task) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { task, next }));
        self.len += 1;
    }

    /// Remove the top task, `None` when nothing is in progress
    pub fn pop(&mut self) -> Option<Task> {
        self.head.take().map(|mut node| {
            self.head = node.next.take();
            self.len -= 1;
            node.task
        })
    }

    pub fn peek(&self) -> Option<&Task> {
        self.head.as_deref().map(|node| &node.task)
    }

    /// Tasks top-first
    pub fn peek_all(&self) -> Vec<&Task> {
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
}

impl Drop for TaskStack {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl fmt::Debug for TaskStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl TaskContainer for TaskStack {
    fn label(&self) -> &'static str {
        "In-Progress Tasks (stack - most recent first)"
    }

    fn empty_notice(&self) -> &'static str {
        "In-Progress list is empty."
    }

    fn len(&self) -> usize {
        self.len
    }

    fn snapshot(&self) -> Vec<&Task> {
        self.peek_all()
    }
}

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

impl<'a> IntoIterator for &'a TaskStack {
    type Item = &'a Task;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
