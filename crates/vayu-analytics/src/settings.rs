use crate::{AnalyticsError, Result};
use serde::{Deserialize, Serialize};

/// AI 配置
///
/// 滑杆参数有固定的取值区间，越界即验证错误
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AiSettings {
    /// AI 系统开关
    pub enabled: bool,

    /// 自动寻优开关
    pub auto_optimization: bool,

    /// 学习率（0.1-1.0）
    pub learning_rate: f64,

    /// 寻优强度（20-100）
    pub optimization_level: u32,

    /// 预测窗口（5-120 分钟）
    pub prediction_window_minutes: u32,
}

impl AiSettings {
    pub const LEARNING_RATE_RANGE: (f64, f64) = (0.1, 1.0);
    pub const OPTIMIZATION_LEVEL_RANGE: (u32, u32) = (20, 100);
    pub const PREDICTION_WINDOW_RANGE: (u32, u32) = (5, 120);

    /// 设置学习率
    pub fn set_learning_rate(&mut self, learning_rate: f64) -> Result<()> {
        let (lo, hi) = Self::LEARNING_RATE_RANGE;
        if !(lo..=hi).contains(&learning_rate) {
            return Err(AnalyticsError::validation(format!(
                "Learning rate {} out of range [{}, {}]",
                learning_rate, lo, hi
            )));
        }
        self.learning_rate = learning_rate;
        Ok(())
    }

    /// 设置寻优强度
    pub fn set_optimization_level(&mut self, level: u32) -> Result<()> {
        let (lo, hi) = Self::OPTIMIZATION_LEVEL_RANGE;
        if !(lo..=hi).contains(&level) {
            return Err(AnalyticsError::validation(format!(
                "Optimization level {} out of range [{}, {}]",
                level, lo, hi
            )));
        }
        self.optimization_level = level;
        Ok(())
    }

    /// 设置预测窗口
    pub fn set_prediction_window(&mut self, minutes: u32) -> Result<()> {
        let (lo, hi) = Self::PREDICTION_WINDOW_RANGE;
        if !(lo..=hi).contains(&minutes) {
            return Err(AnalyticsError::validation(format!(
                "Prediction window {} out of range [{}, {}]",
                minutes, lo, hi
            )));
        }
        self.prediction_window_minutes = minutes;
        Ok(())
    }

    /// 验证整个配置
    pub fn validate(&self) -> Result<()> {
        let mut probe = self.clone();
        probe.set_learning_rate(self.learning_rate)?;
        probe.set_optimization_level(self.optimization_level)?;
        probe.set_prediction_window(self.prediction_window_minutes)?;
        Ok(())
    }
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            auto_optimization: true,
            learning_rate: 0.75,
            optimization_level: 80,
            prediction_window_minutes: 30,
        }
    }
}
