//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。每个子命令都是 `Processor` 的一个调用方，
//! 提供自己的回调。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `processor.rs`, `utils/`
//! - 子模块: list, run, stat

pub mod list;
pub mod run;
pub mod stat;

use crate::cli::{Commands, TargetArgs};
use crate::error::{ProcfilesError, Result};
use crate::processor::Processor;
use crate::utils::output;

use std::path::Path;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::List(args) => list::execute(args),
        Commands::Stat(args) => stat::execute(args),
        Commands::Run(args) => run::execute(args),
    }
}

/// 以宿主文件系统处理目标参数中的所有输入
pub(crate) fn collect_diagnostics<F>(
    target: &TargetArgs,
    extensions: &[String],
    action: F,
) -> Vec<String>
where
    F: FnMut(&Path) -> anyhow::Result<()>,
{
    Processor::new().process(&target.inputs, extensions, action, target.recursive)
}

/// 打印诊断；存在诊断时返回错误
pub(crate) fn report(diagnostics: Vec<String>) -> Result<()> {
    if diagnostics.is_empty() {
        return Ok(());
    }

    let count = output::print_diagnostics(&diagnostics);
    Err(ProcfilesError::Diagnostics { count })
}
