//! # 文件批处理引擎
//!
//! 遍历输入路径，按扩展名筛选文件，对每个匹配文件调用用户回调，
//! 并把所有失败记录为可读的诊断信息，而不是中止整个运行。
//!
//! ## 流程
//! - 对每个输入探测属性：文件 / 目录 / 不可读
//! - 文件：校验（存在性、扩展名）后调用回调
//! - 目录：按每个扩展名列出 `*.<ext>`（可递归），逐个校验并调用回调
//! - 不可读：记录错误后跳过
//!
//! 诊断列表是每次调用的局部值，回调中可以再次调用 `Processor`。
//!
//! ## 依赖关系
//! - 使用 `fs/` 提供的 `FileSystemProbe`
//! - 被 `commands/` 模块使用

use crate::fs::{FileSystemProbe, OsFileSystem, ProbeError};

use std::fmt;
use std::path::Path;
use tracing::{debug, trace};

/// 诊断类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// 无法读取顶层输入的属性
    AttributeProbeFailure,
    /// 文件或目录不存在
    MissingPath,
    /// 无法确定扩展名
    UnknownExtension,
    /// 扩展名不在允许列表中
    ExtensionMismatch,
    /// 目录中没有匹配的文件
    EmptyDirectoryResult,
    /// 目录列举失败
    ListingFailure,
    /// 回调执行失败
    ActionFailure,
}

/// 单条诊断信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    kind: DiagnosticKind,
    path: String,
    message: String,
}

impl Diagnostic {
    fn new(kind: DiagnosticKind, path: &Path, message: String) -> Self {
        Diagnostic {
            kind,
            path: path.display().to_string(),
            message,
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    /// 诊断所涉及的路径（列举失败时为目录）
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// 输入路径分类
#[derive(Debug)]
pub enum PathKind {
    IsFile,
    IsDirectory,
    Unreadable(ProbeError),
}

/// 文件批处理器
#[derive(Debug, Clone, Default)]
pub struct Processor<P = OsFileSystem> {
    probe: P,
}

impl Processor<OsFileSystem> {
    /// 使用宿主文件系统创建处理器
    pub fn new() -> Self {
        Processor {
            probe: OsFileSystem,
        }
    }
}

impl<P: FileSystemProbe> Processor<P> {
    /// 使用指定的探测器创建处理器
    pub fn with_probe(probe: P) -> Self {
        Processor { probe }
    }

    /// 单扩展名版本的 [`Processor::process`]
    pub fn process_extension<I, F>(
        &self,
        inputs: I,
        extension: &str,
        action: F,
        recursive: bool,
    ) -> Vec<String>
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
        F: FnMut(&Path) -> anyhow::Result<()>,
    {
        self.process(inputs, &[extension], action, recursive)
    }

    /// 处理所有输入，返回诊断字符串（为空表示全部成功）
    pub fn process<I, S, F>(
        &self,
        inputs: I,
        extensions: &[S],
        action: F,
        recursive: bool,
    ) -> Vec<String>
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
        S: AsRef<str>,
        F: FnMut(&Path) -> anyhow::Result<()>,
    {
        self.process_detailed(inputs, extensions, action, recursive)
            .into_iter()
            .map(|d| d.to_string())
            .collect()
    }

    /// 与 [`Processor::process`] 相同，但返回带类别的诊断
    pub fn process_detailed<I, S, F>(
        &self,
        inputs: I,
        extensions: &[S],
        mut action: F,
        recursive: bool,
    ) -> Vec<Diagnostic>
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
        S: AsRef<str>,
        F: FnMut(&Path) -> anyhow::Result<()>,
    {
        let extensions: Vec<&str> = extensions.iter().map(|e| e.as_ref()).collect();
        let mut diagnostics = Vec::new();

        for input in inputs {
            let path = input.as_ref();
            match self.classify(path) {
                PathKind::IsFile => {
                    debug!(path = %path.display(), "processing file");
                    self.process_file(path, &extensions, &mut action, &mut diagnostics);
                }
                PathKind::IsDirectory => {
                    debug!(path = %path.display(), recursive, "processing directory");
                    self.process_dir(path, &extensions, &mut action, recursive, &mut diagnostics);
                }
                PathKind::Unreadable(e) => {
                    debug!(path = %path.display(), error = %e, "skipping unreadable input");
                    diagnostics.push(Diagnostic::new(
                        DiagnosticKind::AttributeProbeFailure,
                        path,
                        format!("Problem getting attributes of {}: {}", path.display(), e),
                    ));
                }
            }
        }

        diagnostics
    }

    /// 探测输入路径的类别
    pub fn classify(&self, path: &Path) -> PathKind {
        match self.probe.attributes_of(path) {
            Ok(attrs) if attrs.is_directory() => PathKind::IsDirectory,
            Ok(_) => PathKind::IsFile,
            Err(e) => PathKind::Unreadable(e),
        }
    }

    /// 校验文件：存在性 -> 扩展名可识别 -> 扩展名匹配
    fn is_valid(
        &self,
        path: &Path,
        extensions: &[&str],
        diagnostics: &mut Vec<Diagnostic>,
    ) -> bool {
        if !self.probe.exists(path) {
            diagnostics.push(Diagnostic::new(
                DiagnosticKind::MissingPath,
                path,
                format!("{} doesn't exist!", path.display()),
            ));
            return false;
        }

        let extension = self.probe.extension_of(path);
        if extension.trim().is_empty() {
            diagnostics.push(Diagnostic::new(
                DiagnosticKind::UnknownExtension,
                path,
                format!("Can't establish extension of {}!", path.display()),
            ));
            return false;
        }

        // 与 Unicode 大小写无关
        let lowered = extension.to_lowercase();
        if !extensions.iter().any(|e| e.to_lowercase() == lowered) {
            diagnostics.push(Diagnostic::new(
                DiagnosticKind::ExtensionMismatch,
                path,
                format!(
                    "Extension of {} doesn't match any extension ({})!",
                    path.display(),
                    extensions.join(", ")
                ),
            ));
            return false;
        }

        trace!(path = %path.display(), extension = %extension, "file is valid");
        true
    }

    fn perform_action<F>(&self, path: &Path, action: &mut F, diagnostics: &mut Vec<Diagnostic>)
    where
        F: FnMut(&Path) -> anyhow::Result<()>,
    {
        debug!(path = %path.display(), "invoking action");
        if let Err(e) = action(path) {
            debug!(path = %path.display(), error = %e, "action failed");
            diagnostics.push(Diagnostic::new(
                DiagnosticKind::ActionFailure,
                path,
                format!("{}:\n{:#}", path.display(), e),
            ));
        }
    }

    fn process_file<F>(
        &self,
        path: &Path,
        extensions: &[&str],
        action: &mut F,
        diagnostics: &mut Vec<Diagnostic>,
    ) where
        F: FnMut(&Path) -> anyhow::Result<()>,
    {
        if self.is_valid(path, extensions, diagnostics) {
            self.perform_action(path, action, diagnostics);
        }
    }

    fn process_dir<F>(
        &self,
        path: &Path,
        extensions: &[&str],
        action: &mut F,
        recursive: bool,
        diagnostics: &mut Vec<Diagnostic>,
    ) where
        F: FnMut(&Path) -> anyhow::Result<()>,
    {
        if !self.probe.dir_exists(path) {
            diagnostics.push(Diagnostic::new(
                DiagnosticKind::MissingPath,
                path,
                format!("{} doesn't exist!", path.display()),
            ));
            return;
        }

        let mut files = Vec::new();
        for extension in extensions {
            let pattern = format!("*.{}", extension);
            match self.probe.list_files(path, &pattern, recursive) {
                Ok(found) => {
                    trace!(
                        path = %path.display(),
                        pattern = %pattern,
                        count = found.len(),
                        "listed files"
                    );
                    files.extend(found);
                }
                Err(e) => {
                    debug!(path = %path.display(), pattern = %pattern, error = %e, "listing failed");
                    diagnostics.push(Diagnostic::new(
                        DiagnosticKind::ListingFailure,
                        path,
                        format!("Problem getting files: {}", e),
                    ));
                }
            }
        }

        if files.is_empty() {
            diagnostics.push(Diagnostic::new(
                DiagnosticKind::EmptyDirectoryResult,
                path,
                format!(
                    "There are no files in {} with given extensions ({})!",
                    path.display(),
                    extensions.join(", ")
                ),
            ));
            return;
        }

        for file in &files {
            self.process_file(file, extensions, action, diagnostics);
        }
    }
}
