//! # delete 子命令 CLI 定义
//!
//! 批量删除文件
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/delete.rs`

use super::TargetArgs;
use clap::Args;

/// delete 子命令参数
#[derive(Args, Debug)]
pub struct DeleteArgs {
    #[command(flatten)]
    pub targets: TargetArgs,
}
