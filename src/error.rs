//! # 统一错误处理模块
//!
//! 定义 procfiles 的所有错误类型，使用 `thiserror` 派生。
//!
//! 注意：`Processor` 本身从不返回这些错误，所有处理失败都以诊断字符串的形式
//! 收集（见 `processor.rs`）。这里的错误类型用于 CLI 命令层。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// procfiles 统一错误类型
#[derive(Error, Debug)]
pub enum ProcfilesError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 外部命令错误
    // ─────────────────────────────────────────────────────────────
    #[error("External command '{command}' not found in PATH")]
    CommandNotFound { command: String },

    #[error("External command failed: {command}\n{stderr}")]
    CommandFailed { command: String, stderr: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 运行结果
    // ─────────────────────────────────────────────────────────────
    #[error("{count} problem(s) reported while processing files")]
    Diagnostics { count: usize },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ProcfilesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostics_message() {
        let err = ProcfilesError::Diagnostics { count: 3 };
        assert_eq!(err.to_string(), "3 problem(s) reported while processing files");
    }

    #[test]
    fn test_command_failed_message() {
        let err = ProcfilesError::CommandFailed {
            command: "wc -l".to_string(),
            stderr: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "External command failed: wc -l\nboom");
    }
}
