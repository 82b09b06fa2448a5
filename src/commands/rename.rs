//! # rename 命令实现
//!
//! 逐个为目标文件追加后缀，完成后无条件写入标记文件。
//!
//! ## 功能
//! - 追加后缀重命名（默认 `.old`）
//! - 目标已存在时按 `--overwrite` 决定覆盖还是报告失败
//! - 批处理结束后写入标记文件，与每个路径的结果无关
//!
//! ## 依赖关系
//! - 使用 `cli/rename.rs` 定义的参数
//! - 使用 `batch/`, `utils/output.rs`

use super::{resolve_targets, run_batch};
use crate::batch::marker::DEFAULT_MARKER_CONTENT;
use crate::batch::{BatchOperator, CollisionPolicy, MarkerFile, Operation, PathReport};
use crate::cli::rename::RenameArgs;
use crate::error::Result;
use crate::utils::output;

use std::io::{self, Write};
use std::path::PathBuf;

/// 执行 rename 命令
pub fn execute(args: RenameArgs) -> Result<()> {
    output::print_header("Renaming Files");

    let paths = resolve_targets(&args.targets);
    let policy = if args.overwrite {
        CollisionPolicy::Overwrite
    } else {
        CollisionPolicy::Fail
    };
    let marker = marker_for(&args);

    output::print_info(&format!(
        "{} target(s), suffix '{}'",
        paths.len(),
        args.suffix
    ));

    rename_paths(
        &paths,
        &args.suffix,
        policy,
        marker.as_ref(),
        &mut io::stdout().lock(),
    )?;

    if let Some(marker) = &marker {
        output::print_done(&format!("Marker written to '{}'", marker.path().display()));
    }

    Ok(())
}

/// 要写入的标记文件；`--no-marker` 优先于 `--marker` 和 `FSBATCH_MARKER`
fn marker_for(args: &RenameArgs) -> Option<MarkerFile> {
    if args.no_marker {
        None
    } else {
        Some(MarkerFile::new(&args.marker, DEFAULT_MARKER_CONTENT))
    }
}

/// 重命名给定路径，每个路径向 `out` 写一行结果，然后写入标记文件
pub fn rename_paths<W: Write>(
    paths: &[PathBuf],
    suffix: &str,
    policy: CollisionPolicy,
    marker: Option<&MarkerFile>,
    out: &mut W,
) -> Result<Vec<PathReport>> {
    let operator = BatchOperator::new(Operation::RenameAppendSuffix(suffix.to_string()))?
        .collision_policy(policy);

    let reports = run_batch(&operator, paths, out);

    if let Some(marker) = marker {
        marker.write()?;
    }

    Ok(reports)
}
