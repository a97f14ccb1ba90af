// 设置模块错误类型定义

use thiserror::Error;

/// 设置读写的统一错误类型
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON 序列化错误: {0}")]
    Json(#[from] serde_json::Error),
}
