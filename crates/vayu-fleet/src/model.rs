use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use vayu_types::{AcStatus, Co2Level};

/// 机队规模（固定 16 台）
pub const FLEET_SIZE: usize = 16;

/// 安装位置目录（按设备编号固定）
pub const LOCATIONS: [&str; FLEET_SIZE] = [
    "Conference Room A",
    "Office Floor 1",
    "Lobby",
    "Server Room",
    "Break Room",
    "Office Floor 2",
    "Meeting Room B",
    "Reception",
    "Storage Room",
    "Kitchen",
    "Executive Office",
    "Open Workspace",
    "Training Room",
    "IT Department",
    "HR Department",
    "Finance Office",
];

/// 设备编号（`HVAC-01`..`HVAC-16`）
pub fn device_id(index: usize) -> String {
    format!("HVAC-{:02}", index + 1)
}

/// 数值字段的钳位区间
///
/// 随机游走的每一步都被钳位在这些区间内；不变量对任意多次 tick 成立
pub mod limits {
    /// 温度（°C）
    pub const TEMP: (f64, f64) = (18.0, 30.0);
    /// 湿度（%）
    pub const HUMIDITY: (f64, f64) = (30.0, 80.0);
    /// CO₂ 浓度（ppm）
    pub const CO2: (f64, f64) = (350.0, 1500.0);
    /// 风速（%）
    pub const FAN: (f64, f64) = (0.0, 100.0);
    /// 健康度（%）
    pub const HEALTH: (f64, f64) = (80.0, 100.0);

    /// 将值钳位到区间内
    pub fn clamp(value: f64, range: (f64, f64)) -> f64 {
        value.max(range.0).min(range.1)
    }

    /// 值是否落在区间内
    pub fn contains(value: f64, range: (f64, f64)) -> bool {
        value >= range.0 && value <= range.1
    }
}

/// 设备记录
///
/// 机队中一台 HVAC 设备的实时状态；所有数值由模拟器生成
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeviceRecord {
    /// 设备 ID（会话内稳定）
    pub id: String,

    /// 安装位置（按 ID 固定）
    pub location: String,

    /// 实时温度（°C）
    pub live_temp: f64,

    /// 实时湿度（%）
    pub live_humidity: f64,

    /// 实时 CO₂ 浓度（ppm）
    pub live_co2: f64,

    /// 是否有人
    pub occupancy: bool,

    /// 空调运行模式
    pub ac_status: AcStatus,

    /// 风速（0-100）
    pub fan_speed: f64,

    /// 健康度（0-100）
    pub health: f64,

    /// 最后更新时间
    pub last_updated: DateTime<Utc>,
}

impl DeviceRecord {
    /// 播种一台设备
    ///
    /// 数值字段在各自的钳位区间内均匀随机；运行模式均匀取四种之一
    pub fn seed(index: usize, rng: &mut impl Rng, now: DateTime<Utc>) -> Self {
        Self {
            id: device_id(index),
            location: LOCATIONS[index % FLEET_SIZE].to_string(),
            live_temp: rng.gen_range(limits::TEMP.0..=limits::TEMP.1),
            live_humidity: rng.gen_range(limits::HUMIDITY.0..=limits::HUMIDITY.1),
            live_co2: rng.gen_range(limits::CO2.0..=limits::CO2.1),
            occupancy: rng.gen_bool(0.5),
            ac_status: AcStatus::ALL[rng.gen_range(0..AcStatus::ALL.len())],
            fan_speed: rng.gen_range(limits::FAN.0..=limits::FAN.1),
            health: rng.gen_range(limits::HEALTH.0..=limits::HEALTH.1),
            last_updated: now,
        }
    }

    /// 当前 CO₂ 浓度等级
    pub fn co2_level(&self) -> Co2Level {
        Co2Level::from_ppm(self.live_co2)
    }

    /// 所有钳位字段是否都在区间内
    pub fn within_limits(&self) -> bool {
        limits::contains(self.live_temp, limits::TEMP)
            && limits::contains(self.live_humidity, limits::HUMIDITY)
            && limits::contains(self.live_co2, limits::CO2)
            && limits::contains(self.fan_speed, limits::FAN)
            && limits::contains(self.health, limits::HEALTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_device_id_format() {
        assert_eq!(device_id(0), "HVAC-01");
        assert_eq!(device_id(4), "HVAC-05");
        assert_eq!(device_id(15), "HVAC-16");
    }

    #[test]
    fn test_seed_within_limits() {
        let mut rng = StdRng::seed_from_u64(7);
        let now = Utc::now();

        for i in 0..FLEET_SIZE {
            let device = DeviceRecord::seed(i, &mut rng, now);
            assert!(device.within_limits(), "device {} out of limits", device.id);
            assert_eq!(device.location, LOCATIONS[i]);
            assert_eq!(device.last_updated, now);
        }
    }

    #[test]
    fn test_clamp() {
        assert_eq!(limits::clamp(17.0, limits::TEMP), 18.0);
        assert_eq!(limits::clamp(31.0, limits::TEMP), 30.0);
        assert_eq!(limits::clamp(24.0, limits::TEMP), 24.0);
    }

    #[test]
    fn test_co2_level() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut device = DeviceRecord::seed(0, &mut rng, Utc::now());

        device.live_co2 = 500.0;
        assert_eq!(device.co2_level(), Co2Level::Good);

        device.live_co2 = 1400.0;
        assert_eq!(device.co2_level(), Co2Level::High);
    }
}
