use crate::generator;
use crate::model::{SensorReading, TrendPoint, READING_LOG_CAPACITY};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use tracing::{debug, info};
use vayu_types::DateRange;

/// 环境时序
///
/// 同时维护两个集合：图表滑动窗口（旧→新）和原始读数日志（新→旧，
/// 上限 100）。选中设备或时间范围变化时整体重新播种
#[derive(Debug, Clone)]
pub struct EnvSeries {
    device_id: String,
    range: DateRange,
    window: Vec<TrendPoint>,
    readings: Vec<SensorReading>,
}

impl EnvSeries {
    /// 播种一条完整序列（契约 A）
    ///
    /// 每小时一个点，i = hours_back..=0（含 0，共 hours_back+1 个），
    /// 输出旧→新排序
    pub fn seed(
        device_id: impl Into<String>,
        range: DateRange,
        rng: &mut impl Rng,
        now: DateTime<Utc>,
    ) -> Self {
        let device_id = device_id.into();
        let hours_back = range.hours_back();

        let mut window = Vec::with_capacity((hours_back + 1) as usize);
        let mut readings = Vec::with_capacity((hours_back + 1) as usize);

        for i in (0..=hours_back).rev() {
            let timestamp = now - Duration::hours(i);
            let (temperature, humidity, co2) = generator::seed_values(i, rng);

            window.push(TrendPoint::new(temperature, humidity, co2, timestamp));
            readings.push(SensorReading {
                id: format!("reading-{}", i),
                device_id: device_id.clone(),
                temperature,
                humidity,
                co2,
                timestamp,
            });
        }

        // 读数日志新事件在前
        readings.reverse();

        info!(
            device_id = %device_id,
            range = %range.as_str(),
            points = window.len(),
            "Environmental series seeded"
        );

        Self {
            device_id,
            range,
            window,
            readings,
        }
    }

    /// 执行一次 tick（契约 B）
    ///
    /// 窗口淘汰最旧的点并追加一个实时点；读数日志前插并截断到 100
    pub fn tick(&mut self, rng: &mut impl Rng, now: DateTime<Utc>) -> SensorReading {
        let (temperature, humidity, co2) = generator::live_values(now.timestamp_millis(), rng);

        if !self.window.is_empty() {
            self.window.remove(0);
        }
        self.window.push(TrendPoint::new(temperature, humidity, co2, now));

        let reading = SensorReading {
            id: format!("reading-{}", now.timestamp_millis()),
            device_id: self.device_id.clone(),
            temperature,
            humidity,
            co2,
            timestamp: now,
        };
        self.readings.insert(0, reading.clone());
        self.readings.truncate(READING_LOG_CAPACITY);

        debug!(device_id = %self.device_id, "Environmental series ticked");
        reading
    }

    /// 切换选中的设备或时间范围
    ///
    /// 任一变化都会丢弃当前序列并重新播种；整体替换，观察不到中间态
    ///
    /// # 返回
    /// 是否发生了重新播种
    pub fn select(
        &mut self,
        device_id: impl Into<String>,
        range: DateRange,
        rng: &mut impl Rng,
        now: DateTime<Utc>,
    ) -> bool {
        let device_id = device_id.into();
        if device_id == self.device_id && range == self.range {
            return false;
        }

        *self = Self::seed(device_id, range, rng, now);
        true
    }

    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    /// 图表窗口（旧→新）
    pub fn window(&self) -> &[TrendPoint] {
        &self.window
    }

    /// 原始读数日志（新→旧）
    pub fn readings(&self) -> &[SensorReading] {
        &self.readings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_seed_24h_point_count() {
        let mut rng = StdRng::seed_from_u64(51);
        let series = EnvSeries::seed("HVAC-01", DateRange::Last24h, &mut rng, Utc::now());

        // 24h 播种正好 25 个点（0..24 含两端）
        assert_eq!(series.window().len(), 25);
        assert_eq!(series.readings().len(), 25);
    }

    #[test]
    fn test_seed_window_ordered_oldest_first() {
        let mut rng = StdRng::seed_from_u64(52);
        let now = Utc::now();
        let series = EnvSeries::seed("HVAC-01", DateRange::Last24h, &mut rng, now);

        let window = series.window();
        for pair in window.windows(2) {
            assert!(pair[0].timestamp < pair[1].timestamp);
        }
        assert_eq!(window.last().unwrap().timestamp, now);
        assert_eq!(window[0].timestamp, now - Duration::hours(24));

        // 读数日志方向相反：新事件在前
        let readings = series.readings();
        assert_eq!(readings[0].timestamp, now);
    }

    #[test]
    fn test_seed_larger_ranges() {
        let mut rng = StdRng::seed_from_u64(53);
        let series = EnvSeries::seed("HVAC-02", DateRange::Last7d, &mut rng, Utc::now());
        assert_eq!(series.window().len(), 169);

        let series = EnvSeries::seed("HVAC-02", DateRange::Last30d, &mut rng, Utc::now());
        assert_eq!(series.window().len(), 721);
    }

    #[test]
    fn test_tick_slides_window() {
        let mut rng = StdRng::seed_from_u64(54);
        let now = Utc::now();
        let mut series = EnvSeries::seed("HVAC-01", DateRange::Last24h, &mut rng, now);

        let oldest_before = series.window()[0].timestamp;
        let tick_at = now + Duration::seconds(2);
        series.tick(&mut rng, tick_at);

        // 长度不变：淘汰一个、追加一个
        assert_eq!(series.window().len(), 25);
        assert!(series.window()[0].timestamp > oldest_before);
        assert_eq!(series.window().last().unwrap().timestamp, tick_at);
    }

    #[test]
    fn test_tick_caps_reading_log() {
        let mut rng = StdRng::seed_from_u64(55);
        let now = Utc::now();
        let mut series = EnvSeries::seed("HVAC-01", DateRange::Last30d, &mut rng, now);

        for s in 0..150 {
            series.tick(&mut rng, now + Duration::seconds(s));
        }

        assert_eq!(series.readings().len(), READING_LOG_CAPACITY);
        // 新事件在前
        let readings = series.readings();
        for pair in readings.windows(2) {
            assert!(pair[0].timestamp >= pair[1].timestamp);
        }
    }

    #[test]
    fn test_select_reseeds_fully() {
        let mut rng = StdRng::seed_from_u64(56);
        let now = Utc::now();
        let mut series = EnvSeries::seed("HVAC-01", DateRange::Last24h, &mut rng, now);

        let reseeded = series.select("HVAC-02", DateRange::Last24h, &mut rng, now);
        assert!(reseeded);
        assert_eq!(series.device_id(), "HVAC-02");

        // 旧设备没有任何残留
        assert!(series.readings().iter().all(|r| r.device_id == "HVAC-02"));
        assert_eq!(series.window().len(), 25);
    }

    #[test]
    fn test_select_same_selection_is_noop() {
        let mut rng = StdRng::seed_from_u64(57);
        let now = Utc::now();
        let mut series = EnvSeries::seed("HVAC-01", DateRange::Last24h, &mut rng, now);
        let before = series.window().to_vec();

        let reseeded = series.select("HVAC-01", DateRange::Last24h, &mut rng, now);
        assert!(!reseeded);
        assert_eq!(series.window(), &before[..]);
    }

    #[test]
    fn test_select_range_change_reseeds() {
        let mut rng = StdRng::seed_from_u64(58);
        let now = Utc::now();
        let mut series = EnvSeries::seed("HVAC-01", DateRange::Last24h, &mut rng, now);

        let reseeded = series.select("HVAC-01", DateRange::Last7d, &mut rng, now);
        assert!(reseeded);
        assert_eq!(series.window().len(), 169);
        assert_eq!(series.range(), DateRange::Last7d);
    }
}
