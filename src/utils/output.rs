//! # 美化输出工具
//!
//! 提供统一的终端输出样式。
//!
//! stdout 只承载每个路径的结果行（`Deleted x` / `File not found: x` ...），
//! 一行对应一个输入路径，只按结果着色，不加前缀标签。
//! 标题、提示、完成等状态消息全部走 stderr。
//!
//! ## 依赖关系
//! - 被 `main.rs` 和所有 `commands/` 模块使用
//! - 使用 `colored` crate

use crate::batch::{Operation, Outcome, PathReport};

use colored::Colorize;
use std::io::{self, Write};

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    eprintln!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    eprintln!("{} {}", "[DONE]".green().bold(), msg);
}

/// 写出单个路径的处理结果
pub fn write_report<W: Write>(
    out: &mut W,
    report: &PathReport,
    operation: &Operation,
) -> io::Result<()> {
    let line = report.render(operation);
    match report.outcome {
        Outcome::Applied => writeln!(out, "{}", line.green()),
        Outcome::NotFound => writeln!(out, "{}", line.yellow()),
        Outcome::Failed(_) => writeln!(out, "{}", line.red()),
    }
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    eprintln!("\n{}", line.dimmed());
    eprintln!("  {}", title.bold());
    eprintln!("{}\n", line.dimmed());
}
