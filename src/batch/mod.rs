//! # 批量处理模块
//!
//! 提供对固定路径列表的批量文件操作。
//!
//! ## 功能
//! - 删除 / 追加后缀重命名
//! - 逐路径结果（Applied / NotFound / Failed）
//! - 批处理后的标记文件
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 子模块: operator, marker

pub mod marker;
pub mod operator;

pub use marker::MarkerFile;
pub use operator::{BatchOperator, CollisionPolicy, Operation, Outcome, PathReport};

/// 内置的前端配置文件清单
pub const CONFIG_PRESET: &[&str] = &[
    "postcss.config.js",
    "postcss.config.js.bak",
    "postcss.config.mjs",
];
