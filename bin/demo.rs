//! Fixed demonstration run

use std::io::Write;

use anyhow::Context;
use chrono::NaiveDate;
use taskboard_core::TaskId;
use taskboard_runtime::render::transition_line;
use taskboard_runtime::{TaskManager, Transition};

use crate::cli::OutputFormat;

enum Step {
    Add {
        id: i64,
        name: &'static str,
        description: &'static str,
        due: (i32, u32, u32),
    },
    Start(i64),
    Complete,
    Display,
}

const SCRIPT: &[Step] = &[
    Step::Add {
        id: 1,
        name: "Design Database",
        description: "Create ER diagram and schema",
        due: (2024, 6, 15),
    },
    Step::Add {
        id: 2,
        name: "Write API",
        description: "Implement REST API endpoints",
        due: (2024, 6, 10),
    },
    Step::Add {
        id: 3,
        name: "Frontend UI",
        description: "Create user interface",
        due: (2024, 6, 20),
    },
    Step::Add {
        id: 4,
        name: "Testing",
        description: "Unit and integration tests",
        due: (2024, 6, 12),
    },
    Step::Display,
    Step::Start(2),
    Step::Start(4),
    Step::Start(1),
    Step::Display,
    Step::Complete,
    Step::Complete,
    Step::Display,
    Step::Start(3),
    Step::Display,
];

pub fn run_demo<W: Write>(
    manager: &mut TaskManager,
    out: &mut W,
    format: OutputFormat,
) -> anyhow::Result<()> {
    for step in SCRIPT {
        match step {
            Step::Add {
                id,
                name,
                description,
                due: (year, month, day),
            } => {
                let due = NaiveDate::from_ymd_opt(*year, *month, *day)
                    .with_context(|| format!("invalid due date for task {id}"))?;
                let task = manager.add_task(TaskId(*id), *name, *description, due);
                writeln!(out, "{}", transition_line(Transition::Added, &task))?;
            }
            Step::Start(id) => match manager.start_task(TaskId(*id)) {
                Ok(task) => writeln!(out, "{}", transition_line(Transition::Started, &task))?,
                Err(notice) => writeln!(out, "{notice}")?,
            },
            Step::Complete => match manager.complete_task() {
                Ok(task) => writeln!(out, "{}", transition_line(Transition::Completed, &task))?,
                Err(notice) => writeln!(out, "{notice}")?,
            },
            Step::Display => match format {
                OutputFormat::Text => write!(out, "{}", manager.display_all())?,
                OutputFormat::Json => writeln!(out, "{}", manager.snapshot().to_json_pretty()?)?,
            },
        }
    }
    Ok(())
}
