//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `utils/`
//! - 子模块: delete, rename

pub mod delete;
pub mod rename;

use crate::batch::{BatchOperator, PathReport, CONFIG_PRESET};
use crate::cli::{Commands, TargetArgs};
use crate::error::Result;
use crate::utils::output;

use std::io::Write;
use std::path::PathBuf;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Delete(args) => delete::execute(args),
        Commands::Rename(args) => rename::execute(args),
    }
}

/// 确定待处理的路径列表
///
/// 未给出路径时使用内置清单；给出 `--dir` 时逐个拼接到该目录下。
pub fn resolve_targets(targets: &TargetArgs) -> Vec<PathBuf> {
    let paths: Vec<PathBuf> = if targets.paths.is_empty() {
        CONFIG_PRESET.iter().map(PathBuf::from).collect()
    } else {
        targets.paths.clone()
    };

    match &targets.dir {
        Some(dir) => paths.iter().map(|p| dir.join(p)).collect(),
        None => paths,
    }
}

/// 运行批处理，每个路径向 `out` 写一行结果
fn run_batch<W: Write>(
    operator: &BatchOperator,
    paths: &[PathBuf],
    out: &mut W,
) -> Vec<PathReport> {
    operator.run(paths, |report| {
        output::write_report(out, report, operator.operation()).ok();
    })
}
