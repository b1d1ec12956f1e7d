//! Completed queue (FIFO)
//!
//! Nodes live in an index arena. Each slot links to the next by index, and the
//! queue tracks both ends so `enqueue` never walks the chain. Nothing is ever
//! dequeued, so slots are never freed.

use std::fmt;

use taskboard_core::Task;

use crate::trait_::TaskContainer;

struct Slot {
    task: Task,
    next: Option<usize>,
}

/// Completed tasks in completion order
#[derive(Default)]
pub struct TaskQueue {
    slots: Vec<Slot>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append at the tail
    pub fn enqueue(&mut self, task: Task) {
        let index = self.slots.len();
        self.slots.push(Slot { task, next: None });
        match self.tail {
            Some(tail) => self.slots[tail].next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
    }

    /// Tasks oldest-first
    pub fn list_all(&self) -> Vec<&Task> {
        self.iter().collect()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            slots: &self.slots,
            next: self.head,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

impl fmt::Debug for TaskQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl TaskContainer for TaskQueue {
    fn label(&self) -> &'static str {
        "Completed Tasks (queue - first completed first)"
    }

    fn empty_notice(&self) -> &'static str {
        "Completed list is empty."
    }

    fn len(&self) -> usize {
        self.slots.len()
    }

    fn snapshot(&self) -> Vec<&Task> {
        self.list_all()
    }
}

pub struct Iter<'a> {
    slots: &'a [Slot],
    next: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Task;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.slots.get(self.next?)?;
        self.next = slot.next;
        Some(&slot.task)
    }
}

impl<'a> IntoIterator for &'a TaskQueue {
    type Item = &'a Task;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
