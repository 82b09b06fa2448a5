//! # 标记文件
//!
//! 批处理结束后写入一个固定内容的文件，表示脚本已完整运行。
//! 与每个路径的处理结果无关。
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 调用

use crate::error::{FsBatchError, Result};

use std::fs;
use std::path::{Path, PathBuf};

/// 默认标记文件名
pub const DEFAULT_MARKER_PATH: &str = "styles_test.txt";

/// 默认标记内容
pub const DEFAULT_MARKER_CONTENT: &str = "Config rename script ran successfully";

/// 标记文件
#[derive(Debug, Clone)]
pub struct MarkerFile {
    path: PathBuf,
    content: String,
}

impl MarkerFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 写入（创建或截断）标记文件
    pub fn write(&self) -> Result<()> {
        fs::write(&self.path, &self.content).map_err(|e| FsBatchError::FileWriteError {
            path: self.path.display().to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_file() {
        let dir = TempDir::new().unwrap();
        let marker = MarkerFile::new(
            dir.path().join(DEFAULT_MARKER_PATH),
            DEFAULT_MARKER_CONTENT,
        );

        marker.write().unwrap();

        assert_eq!(
            fs::read_to_string(marker.path()).unwrap(),
            DEFAULT_MARKER_CONTENT
        );
    }

    #[test]
    fn test_write_truncates_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("marker.txt");
        fs::write(&path, "a much longer previous content").unwrap();

        MarkerFile::new(&path, "ok").write().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "ok");
    }

    #[test]
    fn test_write_into_missing_dir_fails() {
        let dir = TempDir::new().unwrap();
        let marker = MarkerFile::new(dir.path().join("no/such/dir/marker.txt"), "ok");

        let err = marker.write().unwrap_err();
        assert!(matches!(err, FsBatchError::FileWriteError { .. }));
    }
}
