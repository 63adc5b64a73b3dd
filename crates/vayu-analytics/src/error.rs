use thiserror::Error;

/// 分析模拟错误类型
#[derive(Error, Debug)]
pub enum AnalyticsError {
    /// 验证错误
    #[error("Validation error: {0}")]
    Validation(String),
}

/// 分析模拟结果类型
pub type Result<T> = std::result::Result<T, AnalyticsError>;

impl AnalyticsError {
    /// 创建验证错误
    pub fn validation(msg: impl Into<String>) -> Self {
        AnalyticsError::Validation(msg.into())
    }
}
