//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `delete`: 批量删除文件
//! - `rename`: 批量追加后缀重命名，并写入标记文件
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: delete, rename

pub mod delete;
pub mod rename;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// fsbatch - 前端配置文件批量清理工具
#[derive(Parser)]
#[command(name = "fsbatch")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Batch delete / rename frontend config files with per-path reporting", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Delete each listed file that exists
    Delete(delete::DeleteArgs),

    /// Rename each listed file by appending a suffix, then write a marker file
    Rename(rename::RenameArgs),
}

/// 两个子命令共用的目标路径参数
#[derive(Args, Debug)]
pub struct TargetArgs {
    /// Files to process, in order (defaults to the postcss config preset)
    pub paths: Vec<PathBuf>,

    /// Directory the paths are joined onto
    #[arg(long, env = "FSBATCH_DIR")]
    pub dir: Option<PathBuf>,
}

/// 串行化读写 `FSBATCH_*` 环境变量的测试
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
