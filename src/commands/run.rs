//! # run 命令实现
//!
//! 对每个匹配文件执行一次外部命令，文件路径作为最后一个参数。
//! 命令不存在或以非零状态退出都记为该文件的失败，继续处理其余文件。
//!
//! ## 依赖关系
//! - 使用 `cli/run.rs` 定义的参数
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::cli::run::RunArgs;
use crate::error::{ProcfilesError, Result};
use crate::utils::{output, progress};

use anyhow::Context;
use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

/// 执行 run 命令
pub fn execute(args: RunArgs) -> Result<()> {
    let extensions = args.target.extensions()?;
    output::print_run_header(&format!("Running '{}'", args.program), &extensions);

    let pb = progress::file_spinner("run");
    let mut succeeded = 0usize;

    let diagnostics = super::collect_diagnostics(&args.target, &extensions, |path| {
        progress::advance(&pb, path);

        let stdout = run_program(&args.program, &args.args, path)
            .with_context(|| format!("running '{}'", args.program))?;
        succeeded += 1;

        pb.suspend(|| {
            output::print_success(&path.display().to_string());
            if args.show_output && !stdout.is_empty() {
                print!("{}", stdout);
            }
        });
        Ok(())
    });

    pb.finish_and_clear();

    output::print_done(&format!(
        "Ran '{}' on {} file(s) ({} problem(s))",
        args.program,
        succeeded,
        diagnostics.len()
    ));

    super::report(diagnostics)
}

/// 调用外部命令，成功时返回标准输出
fn run_program(program: &str, args: &[String], path: &Path) -> Result<String> {
    let output = Command::new(program)
        .args(args)
        .arg(path)
        .output()
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => ProcfilesError::CommandNotFound {
                command: program.to_string(),
            },
            _ => ProcfilesError::CommandFailed {
                command: program.to_string(),
                stderr: e.to_string(),
            },
        })?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    } else {
        Err(ProcfilesError::CommandFailed {
            command: format!("{} {}", program, path.display()),
            stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
        })
    }
}
