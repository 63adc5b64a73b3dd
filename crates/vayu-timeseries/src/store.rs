use crate::model::{SensorReading, TrendPoint};
use crate::query::{paginate, Page};
use crate::series::EnvSeries;
use chrono::{DateTime, Utc};
use rand::Rng;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;
use vayu_types::DateRange;

/// 环境时序存储
///
/// 独占持有当前选中设备/范围的序列；切换选择会在写锁内整体重新播种
pub struct SeriesStore {
    series: Arc<RwLock<EnvSeries>>,
}

impl SeriesStore {
    /// 使用注入的随机源播种
    pub fn seed_with(
        device_id: impl Into<String>,
        range: DateRange,
        rng: &mut impl Rng,
        now: DateTime<Utc>,
    ) -> Self {
        let series = EnvSeries::seed(device_id, range, rng, now);
        Self {
            series: Arc::new(RwLock::new(series)),
        }
    }

    /// 使用线程随机源播种
    pub fn new(device_id: impl Into<String>, range: DateRange) -> Self {
        let mut rng = rand::thread_rng();
        Self::seed_with(device_id, range, &mut rng, Utc::now())
    }

    /// 执行一次 tick（线程随机源 + 当前时间）
    pub async fn tick(&self) -> SensorReading {
        let mut series = self.series.write().await;
        let mut rng = rand::thread_rng();
        series.tick(&mut rng, Utc::now())
    }

    /// 使用注入的随机源和时间执行一次 tick（用于确定性测试）
    pub async fn tick_with<R: Rng + Send>(&self, rng: &mut R, now: DateTime<Utc>) -> SensorReading {
        let mut series = self.series.write().await;
        series.tick(rng, now)
    }

    /// 切换选中的设备/时间范围；任一变化触发重新播种
    pub async fn select(&self, device_id: impl Into<String>, range: DateRange) -> bool {
        let device_id = device_id.into();
        let mut series = self.series.write().await;
        let mut rng = rand::thread_rng();
        let reseeded = series.select(device_id.clone(), range, &mut rng, Utc::now());

        if reseeded {
            info!(device_id = %device_id, range = %range.as_str(), "Series selection changed");
        }
        reseeded
    }

    /// 确定性版本的选择切换（用于测试）
    pub async fn select_with<R: Rng + Send>(
        &self,
        device_id: impl Into<String>,
        range: DateRange,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> bool {
        let mut series = self.series.write().await;
        series.select(device_id, range, rng, now)
    }

    /// 图表窗口快照（旧→新）
    pub async fn chart_snapshot(&self) -> Vec<TrendPoint> {
        self.series.read().await.window().to_vec()
    }

    /// 读数日志的一页（新→旧，页码已钳位）
    pub async fn readings_page(&self, page: usize) -> Page<SensorReading> {
        let series = self.series.read().await;
        paginate(series.readings(), page)
    }

    /// 当前读数条数
    pub async fn readings_len(&self) -> usize {
        self.series.read().await.readings().len()
    }

    /// 当前选中的设备与范围
    pub async fn selection(&self) -> (String, DateRange) {
        let series = self.series.read().await;
        (series.device_id().to_string(), series.range())
    }
}
