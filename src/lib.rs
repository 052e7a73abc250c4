//! # procfiles - 按扩展名批量处理文件
//!
//! 给定一组输入路径（文件或目录）和允许的扩展名列表，遍历输入、
//! 按扩展名筛选文件、对每个匹配文件调用回调，并收集每一个失败的诊断信息。
//!
//! ## 依赖关系
//! ```text
//! lib.rs
//!   ├── processor.rs (遍历与校验引擎)
//!   │     └── fs/        (文件系统探测接口与默认实现)
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑，内置回调)
//!   ├── utils/      (输出、进度、日志)
//!   └── error.rs    (错误处理)
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod fs;
pub mod processor;
pub mod utils;

pub use fs::{Attributes, FileSystemProbe, OsFileSystem, ProbeError};
pub use processor::{Diagnostic, DiagnosticKind, PathKind, Processor};
