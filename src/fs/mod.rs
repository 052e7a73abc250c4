//! # 文件系统探测模块
//!
//! 定义 `Processor` 所依赖的文件系统能力接口 `FileSystemProbe`。
//!
//! ## 接口
//! - `attributes_of` - 读取路径属性（同时充当存在性检查）
//! - `exists` / `dir_exists` - 文件 / 目录存在性检查
//! - `extension_of` - 提取扩展名（不含 `.`）
//! - `list_files` - 按 glob 模式列出目录中的文件
//!
//! 生产环境使用 `os::OsFileSystem`，测试中可替换为脚本化的假实现。
//!
//! ## 依赖关系
//! - 被 `processor.rs` 使用
//! - 子模块: os

pub mod os;

pub use os::OsFileSystem;

use std::path::{Path, PathBuf};
use thiserror::Error;

/// 探测调用失败
///
/// 诊断信息中已包含路径，这里只保留底层错误。
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("{0}")]
    Attributes(#[source] std::io::Error),

    #[error("{0}")]
    Listing(#[source] walkdir::Error),

    #[error("Invalid pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("{0}")]
    Other(String),
}

/// 路径属性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Attributes {
    is_dir: bool,
}

impl Attributes {
    pub fn file() -> Self {
        Attributes { is_dir: false }
    }

    pub fn directory() -> Self {
        Attributes { is_dir: true }
    }

    /// 是否为目录
    pub fn is_directory(&self) -> bool {
        self.is_dir
    }
}

/// 文件系统探测能力
pub trait FileSystemProbe {
    /// 读取路径属性；失败即视为路径不可用
    fn attributes_of(&self, path: &Path) -> Result<Attributes, ProbeError>;

    /// 路径是否存在且不是目录
    fn exists(&self, path: &Path) -> bool;

    /// 路径是否为已存在的目录
    fn dir_exists(&self, path: &Path) -> bool;

    /// 最后一个路径分量中最后一个 `.` 之后的部分，没有则为空串
    fn extension_of(&self, path: &Path) -> String;

    /// 列出 `dir` 下文件名匹配 `pattern` 的文件
    fn list_files(&self, dir: &Path, pattern: &str, recursive: bool)
        -> Result<Vec<PathBuf>, ProbeError>;
}

impl<P: FileSystemProbe + ?Sized> FileSystemProbe for &P {
    fn attributes_of(&self, path: &Path) -> Result<Attributes, ProbeError> {
        (**self).attributes_of(path)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn dir_exists(&self, path: &Path) -> bool {
        (**self).dir_exists(path)
    }

    fn extension_of(&self, path: &Path) -> String {
        (**self).extension_of(path)
    }

    fn list_files(
        &self,
        dir: &Path,
        pattern: &str,
        recursive: bool,
    ) -> Result<Vec<PathBuf>, ProbeError> {
        (**self).list_files(dir, pattern, recursive)
    }
}
