//! # 操作系统文件系统探测
//!
//! `FileSystemProbe` 的默认实现，直接委托给宿主文件系统。
//!
//! ## 依赖关系
//! - 被 `processor.rs` 作为默认探测器使用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配文件名

use super::{Attributes, FileSystemProbe, ProbeError};

use glob::{MatchOptions, Pattern};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件名匹配选项；`glob` 只折叠 ASCII，调用前模式与文件名都已转为小写
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// 宿主文件系统
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystemProbe for OsFileSystem {
    fn attributes_of(&self, path: &Path) -> Result<Attributes, ProbeError> {
        let metadata = fs::metadata(path).map_err(ProbeError::Attributes)?;

        if metadata.is_dir() {
            Ok(Attributes::directory())
        } else {
            Ok(Attributes::file())
        }
    }

    fn exists(&self, path: &Path) -> bool {
        // 设备、FIFO、套接字同样算作文件
        fs::metadata(path).map(|m| !m.is_dir()).unwrap_or(false)
    }

    fn dir_exists(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn extension_of(&self, path: &Path) -> String {
        path.file_name()
            .map(|name| name.to_string_lossy())
            .and_then(|name| name.rsplit_once('.').map(|(_, ext)| ext.to_string()))
            .unwrap_or_default()
    }

    fn list_files(
        &self,
        dir: &Path,
        pattern: &str,
        recursive: bool,
    ) -> Result<Vec<PathBuf>, ProbeError> {
        let glob_pattern =
            Pattern::new(&pattern.to_lowercase()).map_err(|e| ProbeError::Pattern {
                pattern: pattern.to_string(),
                source: e,
            })?;

        let max_depth = if recursive { usize::MAX } else { 1 };

        let walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(max_depth)
            .sort_by_file_name();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(ProbeError::Listing)?;

            // 指向文件的符号链接同样计入
            let is_file = entry.file_type().is_file()
                || (entry.path_is_symlink() && entry.path().is_file());
            if !is_file {
                continue;
            }

            let name = entry.file_name().to_string_lossy().to_lowercase();
            if glob_pattern.matches_with(&name, MATCH_OPTIONS) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }
}
