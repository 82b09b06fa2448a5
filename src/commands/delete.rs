//! # delete 命令实现
//!
//! 逐个删除目标文件，每个路径向 stdout 输出一行结果。
//!
//! ## 依赖关系
//! - 使用 `cli/delete.rs` 定义的参数
//! - 使用 `batch/operator.rs`, `utils/output.rs`

use super::{resolve_targets, run_batch};
use crate::batch::{BatchOperator, Operation, PathReport};
use crate::cli::delete::DeleteArgs;
use crate::error::Result;
use crate::utils::output;

use std::io::{self, Write};
use std::path::PathBuf;

/// 执行 delete 命令
pub fn execute(args: DeleteArgs) -> Result<()> {
    output::print_header("Deleting Files");

    let paths = resolve_targets(&args.targets);
    output::print_info(&format!("{} target(s)", paths.len()));

    delete_paths(&paths, &mut io::stdout().lock())?;
    Ok(())
}

/// 删除给定路径，每个路径向 `out` 写一行结果
///
/// 单个路径的失败只体现在返回的结果里，不会让命令失败。
pub fn delete_paths<W: Write>(paths: &[PathBuf], out: &mut W) -> Result<Vec<PathReport>> {
    let operator = BatchOperator::new(Operation::Delete)?;
    Ok(run_batch(&operator, paths, out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::Outcome;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_delete_scenario() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.txt");
        fs::write(&a, "x").unwrap();
        let missing = dir.path().join("missing.txt");

        let reports = delete_paths(&[a.clone(), missing.clone()], &mut io::sink()).unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].outcome, Outcome::Applied);
        assert_eq!(reports[1].outcome, Outcome::NotFound);
        assert!(!a.exists());
    }

    #[test]
    fn test_stdout_has_one_line_per_path() {
        colored::control::set_override(false);

        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.txt");
        fs::write(&a, "x").unwrap();
        let missing = dir.path().join("missing.txt");
        let sub = dir.path().join("subdir");
        fs::create_dir(&sub).unwrap();

        let mut out = Vec::new();
        delete_paths(&[a.clone(), missing.clone(), sub.clone()], &mut out).unwrap();

        let stdout = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = stdout.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], format!("Deleted {}", a.display()));
        assert_eq!(lines[1], format!("File not found: {}", missing.display()));
        assert!(lines[2].starts_with(&format!("Failed to delete {}: ", sub.display())));
    }

    #[test]
    fn test_empty_list_writes_nothing() {
        let mut out = Vec::new();
        let reports = delete_paths(&[], &mut out).unwrap();
        assert!(reports.is_empty());
        assert!(out.is_empty());
    }
}
