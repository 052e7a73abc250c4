//! # stat 命令实现
//!
//! 统计每个匹配文件的字节数与行数。
//!
//! ## 功能
//! - 表格输出（`tabled`）与合计
//! - 可选导出 CSV（`csv` + `serde`）
//!
//! ## 依赖关系
//! - 使用 `cli/stat.rs` 定义的参数
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::cli::stat::StatArgs;
use crate::cli::TargetArgs;
use crate::error::{ProcfilesError, Result};
use crate::utils::{output, progress};

use indicatif::ProgressBar;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tabled::{Table, Tabled};

/// 单个文件的统计结果
#[derive(Debug, Clone, PartialEq, Eq, Tabled, Serialize)]
pub struct FileStat {
    #[tabled(rename = "File")]
    pub file: String,
    #[tabled(rename = "Bytes")]
    pub bytes: u64,
    #[tabled(rename = "Lines")]
    pub lines: usize,
}

impl FileStat {
    /// 读取文件并统计
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read(path).map_err(|e| ProcfilesError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;

        Ok(FileStat {
            file: path.display().to_string(),
            bytes: content.len() as u64,
            lines: count_lines(&content),
        })
    }
}

/// 执行 stat 命令
pub fn execute(args: StatArgs) -> Result<()> {
    let extensions = args.target.extensions()?;
    output::print_run_header("File statistics", &extensions);

    let pb = progress::file_spinner("stat");
    let (stats, diagnostics) = gather(&args.target, &extensions, &pb);
    pb.finish_and_clear();

    if stats.is_empty() {
        output::print_warning("No files were counted.");
    } else {
        println!("{}", Table::new(&stats));
        output::print_separator();

        let total_bytes: u64 = stats.iter().map(|s| s.bytes).sum();
        let total_lines: usize = stats.iter().map(|s| s.lines).sum();
        output::print_info(&format!(
            "{} file(s), {} bytes, {} lines",
            stats.len(),
            total_bytes,
            total_lines
        ));
    }

    if let Some(csv_path) = &args.csv {
        write_csv(&stats, csv_path)?;
        output::print_success(&format!("Saved statistics to '{}'", csv_path.display()));
    }

    super::report(diagnostics)
}

/// 统计所有匹配文件；读取失败的文件只产生诊断
fn gather(
    target: &TargetArgs,
    extensions: &[String],
    pb: &ProgressBar,
) -> (Vec<FileStat>, Vec<String>) {
    let mut stats: Vec<FileStat> = Vec::new();

    let diagnostics = super::collect_diagnostics(target, extensions, |path| {
        progress::advance(pb, path);
        stats.push(FileStat::read(path)?);
        Ok(())
    });

    (stats, diagnostics)
}

/// 统计行数（末行无换行符时也计为一行）
fn count_lines(content: &[u8]) -> usize {
    let newlines = content.iter().filter(|&&b| b == b'\n').count();
    match content.last() {
        Some(b'\n') | None => newlines,
        Some(_) => newlines + 1,
    }
}

/// 导出统计结果为 CSV
fn write_csv(stats: &[FileStat], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for stat in stats {
        wtr.serialize(stat)?;
    }

    wtr.flush().map_err(|e| ProcfilesError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_count_lines() {
        assert_eq!(count_lines(b""), 0);
        assert_eq!(count_lines(b"one"), 1);
        assert_eq!(count_lines(b"one\n"), 1);
        assert_eq!(count_lines(b"one\ntwo"), 2);
        assert_eq!(count_lines(b"\n\n"), 2);
    }

    #[test]
    fn test_file_stat_read() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("a.txt");
        fs::write(&path, "hello\nworld\n").unwrap();

        let stat = FileStat::read(&path).unwrap();
        assert_eq!(stat.bytes, 12);
        assert_eq!(stat.lines, 2);
    }

    #[test]
    fn test_file_stat_read_missing() {
        let tmp = TempDir::new().unwrap();
        let err = FileStat::read(&tmp.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, ProcfilesError::FileReadError { .. }));
    }

    fn target(inputs: Vec<std::path::PathBuf>) -> TargetArgs {
        TargetArgs {
            inputs,
            extensions: vec!["txt".to_string()],
            recursive: false,
        }
    }

    #[test]
    fn test_gather_counts_matching_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), "one\ntwo\n").unwrap();
        fs::write(tmp.path().join("b.txt"), "three").unwrap();
        fs::write(tmp.path().join("c.md"), "ignored").unwrap();

        let target = target(vec![tmp.path().to_path_buf()]);
        let extensions = target.extensions().unwrap();
        let (stats, diagnostics) = gather(&target, &extensions, &ProgressBar::hidden());

        assert!(diagnostics.is_empty());
        let counts: Vec<(u64, usize)> = stats.iter().map(|s| (s.bytes, s.lines)).collect();
        assert_eq!(counts, vec![(8, 2), (5, 1)]);
    }

    #[cfg(unix)]
    #[test]
    fn test_gather_unreadable_file_is_one_failure() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), "ok\n").unwrap();
        let locked = tmp.path().join("b.txt");
        fs::write(&locked, "secret\n").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // root 可以读取任何文件，此时无法构造读取失败
        if fs::read(&locked).is_ok() {
            return;
        }

        let target = target(vec![tmp.path().to_path_buf()]);
        let extensions = target.extensions().unwrap();
        let (stats, diagnostics) = gather(&target, &extensions, &ProgressBar::hidden());

        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].lines, 1);
        assert_eq!(diagnostics.len(), 1);
        let expected = format!("{}:\nFailed to read file", locked.display());
        assert!(diagnostics[0].starts_with(&expected));
    }

    #[test]
    fn test_execute_reports_problems() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), "x\n").unwrap();
        let out = tmp.path().join("out.csv");

        let ok = execute(StatArgs {
            target: target(vec![tmp.path().join("a.txt")]),
            csv: Some(out.clone()),
        });
        assert!(ok.is_ok());
        assert_eq!(fs::read_to_string(&out).unwrap().lines().count(), 2);

        let err = execute(StatArgs {
            target: target(vec![tmp.path().join("a.txt"), tmp.path().join("missing.txt")]),
            csv: None,
        })
        .unwrap_err();
        assert!(matches!(err, ProcfilesError::Diagnostics { count: 1 }));
    }

    #[test]
    fn test_write_csv() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("stats.csv");
        let stats = vec![
            FileStat {
                file: "a.txt".to_string(),
                bytes: 3,
                lines: 1,
            },
            FileStat {
                file: "b.txt".to_string(),
                bytes: 0,
                lines: 0,
            },
        ];

        write_csv(&stats, &out).unwrap();

        let written = fs::read_to_string(&out).unwrap();
        assert_eq!(written, "file,bytes,lines\na.txt,3,1\nb.txt,0,0\n");
    }
}
