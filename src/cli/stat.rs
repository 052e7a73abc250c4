//! # stat 子命令 CLI 定义
//!
//! 统计匹配文件的字节数与行数
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/stat.rs`

use super::TargetArgs;
use clap::Args;
use std::path::PathBuf;

/// stat 子命令参数
#[derive(Args, Debug)]
pub struct StatArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Also write the per-file counts to a CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,
}
