//! Text layout for the board and transition notices

use taskboard_core::{DisplayConfig, Task};
use taskboard_storage::TaskContainer;

use crate::manager::Transition;

/// Render containers between two separator lines, blank line between each
pub fn render_board(containers: &[&dyn TaskContainer], config: &DisplayConfig) -> String {
    let separator = config.separator();
    let indent = " ".repeat(config.indent);

    let mut lines = vec![String::new(), separator.clone()];
    for (i, container) in containers.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        if container.is_empty() {
            lines.push(container.empty_notice().to_string());
            continue;
        }
        lines.push(format!("{}:", container.label()));
        lines.extend(
            container
                .snapshot()
                .into_iter()
                .map(|task| format!("{indent}{task}")),
        );
    }
    lines.push(separator);
    lines.push(String::new());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// `Added task: Task 1: ...`
pub fn transition_line(transition: Transition, task: &Task) -> String {
    format!("{} task: {}", transition.verb(), task)
}
