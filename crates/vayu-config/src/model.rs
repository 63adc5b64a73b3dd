use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 定时器配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimerConfig {
    /// tick 间隔（毫秒）
    pub tick_interval_ms: u64,
}

impl TimerConfig {
    pub fn new(tick_interval_ms: u64) -> Self {
        Self { tick_interval_ms }
    }

    pub fn period(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self::new(1000)
    }
}

/// 模拟运行配置
///
/// 各模拟器的定时器互相独立；默认周期与原系统一致
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// 机队模拟器（默认 1000ms）
    pub fleet: TimerConfig,

    /// 事件流模拟器（默认 1000ms）
    pub events: TimerConfig,

    /// 环境时序模拟器（默认 2000ms）
    pub series: TimerConfig,

    /// KPI 模拟器（默认 1000ms）
    pub kpi: TimerConfig,

    /// AI 指标模拟器（默认 2000ms）
    pub ai_metrics: TimerConfig,

    /// 快照总线容量
    pub bus_capacity: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            fleet: TimerConfig::new(1000),
            events: TimerConfig::new(1000),
            series: TimerConfig::new(2000),
            kpi: TimerConfig::new(1000),
            ai_metrics: TimerConfig::new(2000),
            bus_capacity: 64,
        }
    }
}
