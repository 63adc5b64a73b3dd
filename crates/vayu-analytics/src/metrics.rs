use crate::settings::AiSettings;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// AI 指标
///
/// 各项指标围绕固定基线做有界随机游走；learning_rate 直接镜像当前配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AiMetrics {
    /// 模型准确率（90-100）
    pub model_accuracy: f64,

    /// 预测置信度（85-100）
    pub prediction_confidence: f64,

    /// 能耗寻优幅度（20-50）
    pub energy_optimization: f64,

    /// 学习率（取自配置）
    pub learning_rate: f64,
}

impl AiMetrics {
    pub const ACCURACY_RANGE: (f64, f64) = (90.0, 100.0);
    pub const CONFIDENCE_RANGE: (f64, f64) = (85.0, 100.0);
    pub const OPTIMIZATION_RANGE: (f64, f64) = (20.0, 50.0);

    /// 执行一次指标游走
    pub fn tick(&mut self, rng: &mut impl Rng, settings: &AiSettings) {
        self.model_accuracy = walk(self.model_accuracy, 0.25, Self::ACCURACY_RANGE, rng);
        self.prediction_confidence =
            walk(self.prediction_confidence, 0.5, Self::CONFIDENCE_RANGE, rng);
        self.energy_optimization =
            walk(self.energy_optimization, 0.4, Self::OPTIMIZATION_RANGE, rng);
        self.learning_rate = settings.learning_rate;
    }

    /// 所有游走指标是否都在区间内
    pub fn within_limits(&self) -> bool {
        in_range(self.model_accuracy, Self::ACCURACY_RANGE)
            && in_range(self.prediction_confidence, Self::CONFIDENCE_RANGE)
            && in_range(self.energy_optimization, Self::OPTIMIZATION_RANGE)
    }
}

impl Default for AiMetrics {
    fn default() -> Self {
        Self {
            model_accuracy: 97.8,
            prediction_confidence: 94.2,
            energy_optimization: 32.4,
            learning_rate: 0.75,
        }
    }
}

fn walk(value: f64, amplitude: f64, range: (f64, f64), rng: &mut impl Rng) -> f64 {
    (value + rng.gen_range(-amplitude..=amplitude)).max(range.0).min(range.1)
}

fn in_range(value: f64, range: (f64, f64)) -> bool {
    value >= range.0 && value <= range.1
}
