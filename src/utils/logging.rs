//! # 日志初始化
//!
//! 安装 `tracing-subscriber` 的 fmt 订阅器，输出到 stderr。
//! 过滤级别取自 `PROCFILES_LOG`（默认 `warn`），`--verbose` 时为 `debug`。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用

use tracing_subscriber::EnvFilter;

/// 日志过滤环境变量
pub const LOG_ENV: &str = "PROCFILES_LOG";

/// 构造日志过滤器
pub fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// 初始化全局日志订阅器（重复调用时忽略）
pub fn init(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
