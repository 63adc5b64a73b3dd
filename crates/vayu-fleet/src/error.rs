use thiserror::Error;

/// 设备机队错误类型
#[derive(Error, Debug)]
pub enum FleetError {
    /// 设备未找到
    #[error("Device not found: {0}")]
    NotFound(String),

    /// 验证错误
    #[error("Validation error: {0}")]
    Validation(String),

    /// 序列化错误
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 其他错误
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// 设备机队结果类型
pub type Result<T> = std::result::Result<T, FleetError>;

impl FleetError {
    /// 创建验证错误
    pub fn validation(msg: impl Into<String>) -> Self {
        FleetError::Validation(msg.into())
    }
}
