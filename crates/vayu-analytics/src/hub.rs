use crate::{AiMetrics, AiSettings, KpiSnapshot, Result};
use rand::Rng;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// 分析模拟中枢
///
/// 统一持有 KPI、AI 指标与 AI 配置；KPI 与指标各自独立 tick
pub struct AnalyticsHub {
    kpi: Arc<RwLock<KpiSnapshot>>,
    metrics: Arc<RwLock<AiMetrics>>,
    settings: Arc<RwLock<AiSettings>>,
}

impl AnalyticsHub {
    pub fn new() -> Self {
        Self {
            kpi: Arc::new(RwLock::new(KpiSnapshot::default())),
            metrics: Arc::new(RwLock::new(AiMetrics::default())),
            settings: Arc::new(RwLock::new(AiSettings::default())),
        }
    }

    /// KPI tick（线程随机源）
    pub async fn tick_kpi(&self) {
        let mut kpi = self.kpi.write().await;
        let mut rng = rand::thread_rng();
        kpi.tick(&mut rng);
    }

    /// AI 指标 tick（线程随机源）
    pub async fn tick_metrics(&self) {
        let settings = self.settings.read().await.clone();
        let mut metrics = self.metrics.write().await;
        let mut rng = rand::thread_rng();
        metrics.tick(&mut rng, &settings);
    }

    /// 确定性 KPI tick（用于测试）
    pub async fn tick_kpi_with<R: Rng + Send>(&self, rng: &mut R) {
        let mut kpi = self.kpi.write().await;
        kpi.tick(rng);
    }

    /// 确定性 AI 指标 tick（用于测试）
    pub async fn tick_metrics_with<R: Rng + Send>(&self, rng: &mut R) {
        let settings = self.settings.read().await.clone();
        let mut metrics = self.metrics.write().await;
        metrics.tick(rng, &settings);
    }

    pub async fn kpi(&self) -> KpiSnapshot {
        self.kpi.read().await.clone()
    }

    pub async fn metrics(&self) -> AiMetrics {
        self.metrics.read().await.clone()
    }

    pub async fn settings(&self) -> AiSettings {
        self.settings.read().await.clone()
    }

    /// 更新 AI 配置（先验证再替换）
    pub async fn update_settings(&self, settings: AiSettings) -> Result<()> {
        settings.validate()?;

        let mut current = self.settings.write().await;
        *current = settings;
        info!(
            learning_rate = %current.learning_rate,
            optimization_level = %current.optimization_level,
            "AI settings updated"
        );
        Ok(())
    }
}

impl Default for AnalyticsHub {
    fn default() -> Self {
        Self::new()
    }
}
