//! # 进度指示工具
//!
//! 遍历结束前文件总数未知，因此只提供 spinner，消息显示当前文件。
//!
//! ## 依赖关系
//! - 被 `commands/stat.rs`, `commands/run.rs` 使用
//! - 使用 `indicatif` crate

use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;

/// 创建显示当前文件的 spinner；stderr 不是终端时返回隐藏的进度条
pub fn file_spinner(prefix: &str) -> ProgressBar {
    if !std::io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold} [{pos} done] {wide_msg}")
            .unwrap()
            .tick_chars("|/-\\ "),
    );
    pb.set_prefix(prefix.to_string());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

/// 切换到下一个文件：计数加一并显示其路径
pub fn advance(pb: &ProgressBar, current: &std::path::Path) {
    pb.inc(1);
    pb.set_message(current.display().to_string());
}
