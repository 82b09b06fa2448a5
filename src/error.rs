//! # 统一错误处理模块
//!
//! 定义 fsbatch 的错误类型，使用 `thiserror` 派生。
//!
//! 单个路径上的失败不会走到这里：它们在 `batch::operator` 中被转换为
//! `Outcome::Failed`。这里只放会让整个命令失败的错误。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// fsbatch 统一错误类型
#[derive(Error, Debug)]
pub enum FsBatchError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}: {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, FsBatchError>;
