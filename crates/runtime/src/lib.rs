//! Taskboard Runtime - 状态流转与展示
//!
//! 职责：
//! - 任务在三个容器之间的流转（To Do → In Progress → Completed）
//! - 看板快照与文本渲染
//!
//! 架构：
//! - TaskManager: 持有三个容器并执行状态流转
//! - render: 文本布局

pub mod manager;
pub mod render;

pub use manager::{BoardSnapshot, TaskManager, Transition, TransitionError};
