//! # 批量文件操作器
//!
//! 对固定顺序的路径列表逐一执行同一种文件操作（删除或追加后缀重命名），
//! 并为每个路径记录结果。
//!
//! ## 功能
//! - 存在性检查，不存在的路径记为 `NotFound`
//! - 单个路径失败不会中断批处理
//! - 严格按输入顺序串行执行
//! - 每产生一个结果立即回调，供调用方逐行输出
//!
//! ## 依赖关系
//! - 被 `commands/delete.rs`, `commands/rename.rs` 调用
//! - 仅使用标准库 `std::fs`

use crate::error::{FsBatchError, Result};

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// 文件操作类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// 删除文件
    Delete,
    /// 重命名为 `path + suffix`（纯字符串拼接，不是扩展名替换）
    RenameAppendSuffix(String),
}

impl Operation {
    /// 用于输出的动词
    pub fn verb(&self) -> &'static str {
        match self {
            Operation::Delete => "delete",
            Operation::RenameAppendSuffix(_) => "rename",
        }
    }

    /// 用于输出的过去式
    pub fn past_tense(&self) -> &'static str {
        match self {
            Operation::Delete => "Deleted",
            Operation::RenameAppendSuffix(_) => "Renamed",
        }
    }
}

/// 重命名目标已存在时的处理策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// 目标存在时记为失败，源文件保持不动
    #[default]
    Fail,
    /// 直接覆盖目标
    Overwrite,
}

/// 单个路径的处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// 操作成功
    Applied,
    /// 检查时路径不存在
    NotFound,
    /// 尝试了操作但出错
    Failed(String),
}

/// 一个输入路径及其结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathReport {
    pub path: PathBuf,
    pub outcome: Outcome,
}

impl PathReport {
    /// 按操作类型渲染成一行控制台文本
    pub fn render(&self, operation: &Operation) -> String {
        let path = self.path.display();
        match &self.outcome {
            Outcome::Applied => format!("{} {}", operation.past_tense(), path),
            Outcome::NotFound => format!("File not found: {}", path),
            Outcome::Failed(reason) => {
                format!("Failed to {} {}: {}", operation.verb(), path, reason)
            }
        }
    }
}

/// 批量文件操作器
#[derive(Debug, Clone)]
pub struct BatchOperator {
    operation: Operation,
    collision: CollisionPolicy,
}

impl BatchOperator {
    /// 创建新的操作器
    ///
    /// 空后缀会把文件重命名为它自己，直接拒绝。
    pub fn new(operation: Operation) -> Result<Self> {
        if let Operation::RenameAppendSuffix(suffix) = &operation {
            if suffix.is_empty() {
                return Err(FsBatchError::InvalidArgument(
                    "rename suffix must not be empty".to_string(),
                ));
            }
        }
        Ok(Self {
            operation,
            collision: CollisionPolicy::default(),
        })
    }

    /// 设置重命名冲突策略
    pub fn collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.collision = policy;
        self
    }

    pub fn operation(&self) -> &Operation {
        &self.operation
    }

    /// 处理路径列表，每得到一个结果就调用一次 `on_report`
    pub fn run<P, F>(&self, paths: &[P], mut on_report: F) -> Vec<PathReport>
    where
        P: AsRef<Path>,
        F: FnMut(&PathReport),
    {
        let mut reports = Vec::with_capacity(paths.len());

        for path in paths {
            let path = path.as_ref();
            let report = PathReport {
                path: path.to_path_buf(),
                outcome: self.apply(path),
            };
            on_report(&report);
            reports.push(report);
        }

        reports
    }

    /// 对单个路径执行操作
    fn apply(&self, path: &Path) -> Outcome {
        if !path.exists() {
            return Outcome::NotFound;
        }

        let result = match &self.operation {
            Operation::Delete => fs::remove_file(path).map_err(|e| e.to_string()),
            Operation::RenameAppendSuffix(suffix) => self.rename(path, suffix),
        };

        match result {
            Ok(()) => Outcome::Applied,
            Err(reason) => Outcome::Failed(reason),
        }
    }

    fn rename(&self, path: &Path, suffix: &str) -> std::result::Result<(), String> {
        let target = append_suffix(path, suffix);

        if self.collision == CollisionPolicy::Fail && target.exists() {
            return Err(format!(
                "destination already exists: {}",
                target.display()
            ));
        }

        fs::rename(path, &target).map_err(|e| e.to_string())
    }
}

/// 在路径末尾直接拼接后缀
pub fn append_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut raw: OsString = path.as_os_str().to_owned();
    raw.push(suffix);
    PathBuf::from(raw)
}
