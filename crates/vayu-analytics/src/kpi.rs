use rand::Rng;
use serde::{Deserialize, Serialize};

/// 总览 KPI
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KpiSnapshot {
    /// 在线设备数（≥ 0）
    pub total_units: i64,

    /// 节能幅度（0-100）
    pub energy_savings: f64,

    /// 活动告警数（≥ 0）
    pub active_alerts: i64,

    /// 系统健康度（85-100）
    pub system_health: f64,
}

impl KpiSnapshot {
    pub const ENERGY_SAVINGS_RANGE: (f64, f64) = (0.0, 100.0);
    pub const SYSTEM_HEALTH_RANGE: (f64, f64) = (85.0, 100.0);

    /// 执行一次 KPI 游走
    ///
    /// 计数字段按 {-1, 0, +1} 均匀步进并在 0 处截断
    pub fn tick(&mut self, rng: &mut impl Rng) {
        self.total_units = (self.total_units + rng.gen_range(-1i64..=1)).max(0);
        self.energy_savings = walk(self.energy_savings, 1.0, Self::ENERGY_SAVINGS_RANGE, rng);
        self.active_alerts = (self.active_alerts + rng.gen_range(-1i64..=1)).max(0);
        self.system_health = walk(self.system_health, 1.0, Self::SYSTEM_HEALTH_RANGE, rng);
    }

    pub fn within_limits(&self) -> bool {
        self.total_units >= 0
            && self.active_alerts >= 0
            && self.energy_savings >= Self::ENERGY_SAVINGS_RANGE.0
            && self.energy_savings <= Self::ENERGY_SAVINGS_RANGE.1
            && self.system_health >= Self::SYSTEM_HEALTH_RANGE.0
            && self.system_health <= Self::SYSTEM_HEALTH_RANGE.1
    }
}

impl Default for KpiSnapshot {
    fn default() -> Self {
        Self {
            total_units: 16,
            energy_savings: 29.0,
            active_alerts: 2,
            system_health: 98.0,
        }
    }
}

fn walk(value: f64, amplitude: f64, range: (f64, f64), rng: &mut impl Rng) -> f64 {
    (value + rng.gen_range(-amplitude..=amplitude)).max(range.0).min(range.1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_kpi_walk_stays_bounded() {
        let mut kpi = KpiSnapshot::default();
        let mut rng = StdRng::seed_from_u64(81);

        for _ in 0..1000 {
            kpi.tick(&mut rng);
            assert!(kpi.within_limits());
        }
    }

    #[test]
    fn test_counts_never_negative() {
        let mut kpi = KpiSnapshot {
            total_units: 0,
            active_alerts: 0,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(82);

        for _ in 0..200 {
            kpi.tick(&mut rng);
            assert!(kpi.total_units >= 0);
            assert!(kpi.active_alerts >= 0);
        }
    }

    #[test]
    fn test_kpi_serde_shape() {
        let kpi = KpiSnapshot::default();
        let json = serde_json::to_value(&kpi).unwrap();
        assert_eq!(json["total_units"], 16);
        assert_eq!(json["active_alerts"], 2);
    }
}
