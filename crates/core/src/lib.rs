// Taskboard Core - 核心数据模型
//!
//! 包含：
//! - Task: 任务模型与状态
//! - Config: 显示与日志配置

mod config;
mod task;

pub use config::*;
pub use task::*;
