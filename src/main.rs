//! # procfiles 命令行入口
//!
//! ## 子命令
//! - `list` - 列出匹配的文件
//! - `stat` - 统计匹配文件的字节数和行数
//! - `run`  - 对每个匹配文件执行外部命令

use clap::Parser;
use procfiles::cli::Cli;
use procfiles::{commands, utils};

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();
    utils::logging::init(cli.verbose);

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
