//! Taskboard 配置系统
//!
//! 支持 YAML 配置文件和环境变量

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// 日志级别覆盖
pub const ENV_LOG_LEVEL: &str = "TASKBOARD_LOG";

/// 分隔线宽度覆盖
pub const ENV_SEPARATOR_WIDTH: &str = "TASKBOARD_SEPARATOR_WIDTH";

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Taskboard 主配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// 显示配置
    #[serde(default)]
    pub display: DisplayConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

impl BoardConfig {
    /// 从 YAML 字符串解析
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(source)?)
    }

    /// 从文件加载
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&source)
    }

    /// 应用进程环境变量覆盖
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// 应用覆盖，`lookup` 按变量名返回值
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL).filter(|v| !v.trim().is_empty()) {
            self.log.level = level.trim().to_string();
        }
        // 无法解析的值直接忽略
        if let Some(width) = lookup(ENV_SEPARATOR_WIDTH).and_then(|v| v.trim().parse().ok()) {
            self.display.separator_width = width;
        }
    }
}

/// 显示配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// 分隔线字符
    #[serde(default = "default_separator_char")]
    pub separator_char: char,

    /// 分隔线宽度
    #[serde(default = "default_separator_width")]
    pub separator_width: usize,

    /// 任务行缩进
    #[serde(default = "default_indent")]
    pub indent: usize,
}

fn default_separator_char() -> char {
    '='
}

fn default_separator_width() -> usize {
    50
}

fn default_indent() -> usize {
    2
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            separator_char: default_separator_char(),
            separator_width: default_separator_width(),
            indent: default_indent(),
        }
    }
}

impl DisplayConfig {
    pub fn separator(&self) -> String {
        std::iter::repeat_n(self.separator_char, self.separator_width).collect()
    }
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// 日志级别 (trace/debug/info/warn/error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = BoardConfig::default();
        assert_eq!(config.display.separator(), "=".repeat(50));
        assert_eq!(config.display.indent, 2);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = BoardConfig::from_yaml_str("display:\n  separator_width: 10\n").unwrap();
        assert_eq!(config.display.separator_width, 10);
        assert_eq!(config.display.separator_char, '=');
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(BoardConfig::from_yaml_str("  \n").unwrap(), BoardConfig::default());
    }

    #[test]
    fn test_invalid_yaml() {
        let err = BoardConfig::from_yaml_str("display: [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "display:\n  separator_char: '-'\nlog:\n  level: debug").unwrap();

        let config = BoardConfig::load(file.path()).unwrap();
        assert_eq!(config.display.separator_char, '-');
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = BoardConfig::load(dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (ENV_LOG_LEVEL, "warn"),
            (ENV_SEPARATOR_WIDTH, "not-a-number"),
        ]);
        let mut config = BoardConfig::default();
        config.apply_overrides_from(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.log.level, "warn");
        assert_eq!(config.display.separator_width, 50);

        config.apply_overrides_from(|key| (key == ENV_SEPARATOR_WIDTH).then(|| "12".to_string()));
        assert_eq!(config.display.separator_width, 12);
        assert_eq!(config.log.level, "warn");
    }
}
