//! Container trait definition
//!
//! Read-only surface shared by the three lifecycle containers

use taskboard_core::Task;

/// Container trait for rendering and inspection
pub trait TaskContainer {
    /// Heading shown above the container's tasks
    fn label(&self) -> &'static str;

    /// Line shown instead of the heading when the container is empty
    fn empty_notice(&self) -> &'static str;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tasks in the container's natural order, without removing them
    fn snapshot(&self) -> Vec<&Task>;
}
