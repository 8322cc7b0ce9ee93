//! Twig 统一错误类型定义
//!
//! 使用 `thiserror` 库提供统一的错误处理，支持错误链式传播。

use std::io;
use thiserror::Error;

/// Twig 错误类型
#[derive(Debug, Error)]
pub enum TwigError {
    /// I/O 错误（任务文件读写、终端交互）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON 解析/序列化错误
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// 标题重复（大小写不敏感比较）
    #[error("a task named '{0}' already exists")]
    DuplicateTitle(String),

    /// 位置越界（1-based 序号超出当前列表）
    #[error("no task at position {0}")]
    IndexOutOfRange(usize),

    /// 无效输入
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Twig Result 类型别名
pub type Result<T> = std::result::Result<T, TwigError>;

impl TwigError {
    /// 创建 InvalidInput 错误
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TwigError::DuplicateTitle("Buy milk".to_string());
        assert_eq!(err.to_string(), "a task named 'Buy milk' already exists");

        let err = TwigError::IndexOutOfRange(7);
        assert_eq!(err.to_string(), "no task at position 7");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: TwigError = io_err.into();
        assert!(matches!(err, TwigError::Io(_)));
    }
}
