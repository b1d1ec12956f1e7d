//! Taskboard E2E测试
//!
//! 运行编译后的二进制并检查标准输出

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

// ============== 基础设施 ==============

/// Taskboard CLI 调用封装
pub struct BoardCli {
    path: PathBuf,
    config: Option<PathBuf>,
    env: Vec<(String, String)>,
}

#[derive(Debug)]
pub struct CliResult {
    pub success: bool,
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl BoardCli {
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(env!("CARGO_BIN_EXE_taskboard")),
            config: None,
            env: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: PathBuf) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }

    /// 执行命令
    pub fn run(&self, args: &[&str]) -> CliResult {
        let mut cmd = Command::new(&self.path);
        if let Some(config) = &self.config {
            cmd.arg("--config").arg(config);
        }
        cmd.env_remove("TASKBOARD_LOG")
            .env_remove("TASKBOARD_SEPARATOR_WIDTH");
        for (key, value) in &self.env {
            cmd.env(key, value);
        }

        let output = cmd
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .expect("failed to run taskboard binary");

        CliResult {
            success: output.status.success(),
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

fn sep() -> String {
    "=".repeat(50)
}

// ============== 测试 ==============

#[test]
fn test_demo_exits_cleanly() {
    let result = BoardCli::new().run(&["--no-pause"]);
    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(result.exit_code, Some(0));
    assert!(!result.stdout.contains("Press any key to exit..."));
}

#[test]
fn test_demo_initial_board_is_date_ordered() {
    let result = BoardCli::new().run(&["--no-pause"]);
    let first_board = format!(
        "\n{sep}\nTo-Do Tasks (ordered by date):\n\
         \x20 Task 2: Write API (To Do) - Due: 2024-06-10\n\
         \x20 Task 4: Testing (To Do) - Due: 2024-06-12\n\
         \x20 Task 1: Design Database (To Do) - Due: 2024-06-15\n\
         \x20 Task 3: Frontend UI (To Do) - Due: 2024-06-20\n\
         \n\
         In-Progress list is empty.\n\
         \n\
         Completed list is empty.\n\
         {sep}\n\n",
        sep = sep()
    );
    assert!(result.stdout.contains(&first_board), "stdout: {}", result.stdout);
}

#[test]
fn test_demo_final_board() {
    let result = BoardCli::new().run(&["--no-pause"]);
    let final_board = format!(
        "Started task: Task 3: Frontend UI (In Progress) - Due: 2024-06-20\n\
         \n\
         {sep}\n\
         To-Do list is empty.\n\
         \n\
         In-Progress Tasks (stack - most recent first):\n\
         \x20 Task 3: Frontend UI (In Progress) - Due: 2024-06-20\n\
         \x20 Task 2: Write API (In Progress) - Due: 2024-06-10\n\
         \n\
         Completed Tasks (queue - first completed first):\n\
         \x20 Task 1: Design Database (Completed) - Due: 2024-06-15\n\
         \x20 Task 4: Testing (Completed) - Due: 2024-06-12\n\
         {sep}\n\n",
        sep = sep()
    );
    assert!(result.stdout.ends_with(&final_board), "stdout: {}", result.stdout);
}

#[test]
fn test_demo_pauses_by_default() {
    // stdin is closed, so the wait returns immediately
    let result = BoardCli::new().run(&[]);
    assert!(result.success);
    assert!(result.stdout.ends_with("Press any key to exit...\n"));
}

#[test]
fn test_json_output() {
    let result = BoardCli::new().run(&["--no-pause", "--output", "json"]);
    assert!(result.success);
    assert!(!result.stdout.contains(&sep()));

    // last snapshot is the trailing JSON object
    let start = result.stdout.rfind("\n{").map(|i| i + 1).unwrap();
    let last: serde_json::Value = serde_json::from_str(&result.stdout[start..]).unwrap();
    let ids = |key: &str| -> Vec<i64> {
        last[key]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_i64().unwrap())
            .collect()
    };
    assert_eq!(ids("todo"), Vec::<i64>::new());
    assert_eq!(ids("in_progress"), vec![3, 2]);
    assert_eq!(ids("completed"), vec![1, 4]);
}

#[test]
fn test_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "display:\n  separator_char: '*'\n  separator_width: 8\n  indent: 1").unwrap();

    let result = BoardCli::new()
        .with_config(file.path().to_path_buf())
        .run(&["--no-pause"]);
    assert!(result.success);
    assert!(result.stdout.contains("\n********\nTo-Do Tasks (ordered by date):\n Task 2:"));
    assert!(!result.stdout.contains(&sep()));
}

#[test]
fn test_bad_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let result = BoardCli::new()
        .with_config(dir.path().join("missing.yaml"))
        .run(&["--no-pause", "--verbose"]);
    assert!(result.success);
    assert!(result.stdout.contains(&sep()));
    assert!(result.stderr.contains("Falling back to default config"));
}

#[test]
fn test_env_override() {
    let result = BoardCli::new()
        .with_env("TASKBOARD_SEPARATOR_WIDTH", "3")
        .run(&["--no-pause"]);
    assert!(result.success);
    assert!(result.stdout.contains("\n===\nTo-Do Tasks"));
    assert!(!result.stdout.contains(&sep()));
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    let result = BoardCli::new().run(&["--no-pause", "--verbose"]);
    assert!(result.success);
    assert!(result.stderr.contains("Task started"));
    assert!(!result.stdout.contains("Task started"));
}
