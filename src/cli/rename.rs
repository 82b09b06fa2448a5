//! # rename 子命令 CLI 定义
//!
//! 批量追加后缀重命名，完成后写入标记文件
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/rename.rs`

use super::TargetArgs;
use crate::batch::marker::DEFAULT_MARKER_PATH;
use clap::Args;
use std::path::PathBuf;

/// rename 子命令参数
#[derive(Args, Debug)]
pub struct RenameArgs {
    #[command(flatten)]
    pub targets: TargetArgs,

    /// Suffix appended to every file name
    #[arg(long, env = "FSBATCH_SUFFIX", default_value = ".old")]
    pub suffix: String,

    /// Replace the destination if it already exists (default: report failure)
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,

    // ─────────────────────────────────────────────────────────────
    // Marker file
    // ─────────────────────────────────────────────────────────────
    /// Marker file written after the batch
    #[arg(long, env = "FSBATCH_MARKER", default_value = DEFAULT_MARKER_PATH)]
    pub marker: PathBuf,

    /// Skip writing the marker file (takes precedence over --marker)
    #[arg(long, default_value_t = false)]
    pub no_marker: bool,
}
