//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `list`: 列出匹配的文件
//! - `stat`: 统计字节数与行数
//! - `run`: 对每个文件执行外部命令
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: run, stat

pub mod run;
pub mod stat;

use crate::error::{ProcfilesError, Result};

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// procfiles - 按扩展名批量处理文件
#[derive(Parser)]
#[command(name = "procfiles")]
#[command(version)]
#[command(about = "Apply an operation to every file with given extensions", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging (overrides PROCFILES_LOG)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// List every file that matches the given extensions
    List(TargetArgs),

    /// Count bytes and lines of every matching file
    Stat(stat::StatArgs),

    /// Run an external program once per matching file
    Run(run::RunArgs),
}

/// 所有子命令共享的输入参数
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Input files or directories
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Allowed file extensions, without the leading dot
    #[arg(
        short,
        long = "ext",
        value_delimiter = ',',
        default_value = "txt",
        env = "PROCFILES_EXT"
    )]
    pub extensions: Vec<String>,

    /// Search directories recursively
    #[arg(short, long, default_value_t = false, env = "PROCFILES_RECURSIVE")]
    pub recursive: bool,
}

impl TargetArgs {
    /// 规范化扩展名：去除空白和前导 `.`，拒绝空值
    pub fn extensions(&self) -> Result<Vec<String>> {
        self.extensions
            .iter()
            .map(|raw| {
                let ext = raw.trim().trim_start_matches('.');
                if ext.is_empty() {
                    Err(ProcfilesError::InvalidArgument(format!(
                        "Empty extension in '{}'",
                        self.extensions.join(",")
                    )))
                } else {
                    Ok(ext.to_string())
                }
            })
            .collect()
    }
}
