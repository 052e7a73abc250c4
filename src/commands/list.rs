//! # list 命令实现
//!
//! 逐行打印每个匹配的文件路径，便于管道处理。
//!
//! ## 依赖关系
//! - 使用 `cli/mod.rs` 定义的 `TargetArgs`
//! - 使用 `commands/mod.rs` 的处理与报告函数

use crate::cli::TargetArgs;
use crate::error::Result;

use tracing::info;

/// 执行 list 命令
pub fn execute(args: TargetArgs) -> Result<()> {
    let extensions = args.extensions()?;

    let mut listed = 0usize;
    let diagnostics = super::collect_diagnostics(&args, &extensions, |path| {
        println!("{}", path.display());
        listed += 1;
        Ok(())
    });

    info!(listed, problems = diagnostics.len(), "list finished");
    super::report(diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProcfilesError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_execute_lists_directory() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), "").unwrap();

        let args = TargetArgs {
            inputs: vec![tmp.path().to_path_buf()],
            extensions: vec![".txt".to_string()],
            recursive: false,
        };
        assert!(execute(args).is_ok());
    }

    #[test]
    fn test_execute_counts_problems() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("notes.md"), "").unwrap();

        let args = TargetArgs {
            inputs: vec![tmp.path().to_path_buf(), tmp.path().join("missing.txt")],
            extensions: vec!["txt".to_string()],
            recursive: true,
        };
        let err = execute(args).unwrap_err();
        assert!(matches!(err, ProcfilesError::Diagnostics { count: 2 }));
    }

    #[test]
    fn test_execute_rejects_empty_extension() {
        let args = TargetArgs {
            inputs: vec!["a".into()],
            extensions: vec![String::new()],
            recursive: false,
        };
        assert!(matches!(execute(args), Err(ProcfilesError::InvalidArgument(_))));
    }
}
