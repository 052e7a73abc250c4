//! # run 子命令 CLI 定义
//!
//! 对每个匹配文件执行一次外部命令，文件路径作为最后一个参数追加
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/run.rs`

use super::TargetArgs;
use clap::Args;

/// run 子命令参数
#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Program to run for each file
    #[arg(short = 'x', long = "exec", required = true)]
    pub program: String,

    /// Arguments passed to the program before the file path
    #[arg(last = true)]
    pub args: Vec<String>,

    /// Print the program's standard output
    #[arg(long, default_value_t = false)]
    pub show_output: bool,
}

#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_parse_run() {
        let cli = Cli::try_parse_from([
            "procfiles", "run", "-x", "wc", "-e", "md", "docs", "--", "-l", "-c",
        ])
        .unwrap();
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.program, "wc");
                assert_eq!(args.args, vec!["-l", "-c"]);
                assert_eq!(args.target.inputs.len(), 1);
                assert_eq!(args.target.extensions, vec!["md"]);
                assert!(!args.show_output);
            }
            _ => panic!("expected run"),
        }
    }
}
