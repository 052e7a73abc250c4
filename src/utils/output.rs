//! # 美化输出工具
//!
//! 提供统一的终端输出样式。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块使用
//! - 使用 `colored` crate

use colored::Colorize;

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印诊断列表，返回条数
pub fn print_diagnostics(diagnostics: &[String]) -> usize {
    for diag in diagnostics {
        print_error(&indent_continuation(diag));
    }
    diagnostics.len()
}

/// 多行诊断（如回调失败）的后续行缩进到标记之后
fn indent_continuation(diag: &str) -> String {
    diag.lines().collect::<Vec<_>>().join("\n      ")
}

/// 打印运行标题：操作名与扩展名列表
pub fn print_run_header(operation: &str, extensions: &[String]) {
    println!(
        "{} {} {}",
        "==>".cyan().bold(),
        operation.bold(),
        format!("[{}]", extensions.join(", ")).dimmed()
    );
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(60).dimmed());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_continuation() {
        assert_eq!(indent_continuation("a.txt:\nboom"), "a.txt:\n      boom");
        assert_eq!(indent_continuation("single"), "single");
    }
}
