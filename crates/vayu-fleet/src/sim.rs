use crate::control::{self, ControlRequest};
use crate::model::{limits, DeviceRecord, FLEET_SIZE};
use crate::{FleetError, Result};
use chrono::{DateTime, Utc};
use rand::Rng;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// 对机队执行一次 tick
///
/// 每台设备独立地按有界随机游走更新；`ac_status` 只由手动控制修改，
/// tick 不会触碰它
pub fn tick_fleet(fleet: &mut [DeviceRecord], rng: &mut impl Rng, now: DateTime<Utc>) {
    for device in fleet.iter_mut() {
        device.live_temp = walk(device.live_temp, 0.25, limits::TEMP, rng);
        device.live_humidity = walk(device.live_humidity, 1.0, limits::HUMIDITY, rng);
        device.live_co2 = walk(device.live_co2, 25.0, limits::CO2, rng);
        device.fan_speed = walk(device.fan_speed, 5.0, limits::FAN, rng);
        device.health = walk(device.health, 1.0, limits::HEALTH, rng);

        // 以 0.3 的概率翻转占用状态
        if rng.gen_bool(0.3) {
            device.occupancy = !device.occupancy;
        }

        device.last_updated = now;
    }
}

/// 有界随机游走的一步：加上 U(-amplitude, amplitude) 后钳位
fn walk(value: f64, amplitude: f64, range: (f64, f64), rng: &mut impl Rng) -> f64 {
    limits::clamp(value + rng.gen_range(-amplitude..=amplitude), range)
}

/// 机队模拟器
///
/// 独占持有设备集合；视图只通过快照读取
pub struct FleetSimulator {
    devices: Arc<RwLock<Vec<DeviceRecord>>>,
}

impl FleetSimulator {
    /// 播种一支新机队（16 台，位置目录固定）
    pub fn seed_with(rng: &mut impl Rng, now: DateTime<Utc>) -> Self {
        let devices: Vec<DeviceRecord> = (0..FLEET_SIZE)
            .map(|i| DeviceRecord::seed(i, rng, now))
            .collect();

        info!(count = devices.len(), "Fleet seeded");

        Self {
            devices: Arc::new(RwLock::new(devices)),
        }
    }

    /// 使用线程随机源播种
    pub fn new() -> Self {
        let mut rng = rand::thread_rng();
        Self::seed_with(&mut rng, Utc::now())
    }

    /// 执行一次 tick（线程随机源 + 当前时间）
    pub async fn tick(&self) {
        let mut devices = self.devices.write().await;
        let mut rng = rand::thread_rng();
        tick_fleet(&mut devices, &mut rng, Utc::now());
        debug!(count = devices.len(), "Fleet ticked");
    }

    /// 使用注入的随机源和时间执行一次 tick（用于确定性测试）
    pub async fn tick_with<R: Rng + Send>(&self, rng: &mut R, now: DateTime<Utc>) {
        let mut devices = self.devices.write().await;
        tick_fleet(&mut devices, rng, now);
    }

    /// 机队快照
    pub async fn snapshot(&self) -> Vec<DeviceRecord> {
        self.devices.read().await.clone()
    }

    /// 查询单台设备
    pub async fn get(&self, device_id: &str) -> Option<DeviceRecord> {
        let devices = self.devices.read().await;
        devices.iter().find(|d| d.id == device_id).cloned()
    }

    /// 查询单台设备，不存在时报错
    pub async fn require(&self, device_id: &str) -> Result<DeviceRecord> {
        self.get(device_id)
            .await
            .ok_or_else(|| FleetError::NotFound(device_id.to_string()))
    }

    /// 设备数量
    pub async fn count(&self) -> usize {
        self.devices.read().await.len()
    }

    /// 应用手动控制
    ///
    /// 覆盖目标设备的温度与风速并强制 `ac_status = auto`；
    /// 未知设备 ID 是 no-op，返回 false
    pub async fn apply_control(&self, request: &ControlRequest) -> Result<bool> {
        let mut devices = self.devices.write().await;
        control::apply(&mut devices, request)
    }
}

impl Default for FleetSimulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_tick_preserves_limits() {
        let mut rng = StdRng::seed_from_u64(42);
        let now = Utc::now();
        let mut fleet: Vec<DeviceRecord> =
            (0..FLEET_SIZE).map(|i| DeviceRecord::seed(i, &mut rng, now)).collect();

        // 随机游走任意多步都不能逃出区间
        for _ in 0..500 {
            tick_fleet(&mut fleet, &mut rng, Utc::now());
            for device in &fleet {
                assert!(device.within_limits(), "device {} escaped limits", device.id);
            }
        }
    }

    #[test]
    fn test_tick_does_not_touch_ac_status() {
        let mut rng = StdRng::seed_from_u64(3);
        let now = Utc::now();
        let mut fleet: Vec<DeviceRecord> =
            (0..FLEET_SIZE).map(|i| DeviceRecord::seed(i, &mut rng, now)).collect();
        let statuses: Vec<_> = fleet.iter().map(|d| d.ac_status).collect();

        for _ in 0..50 {
            tick_fleet(&mut fleet, &mut rng, Utc::now());
        }

        for (device, status) in fleet.iter().zip(statuses) {
            assert_eq!(device.ac_status, status);
        }
    }

    #[test]
    fn test_tick_updates_timestamp() {
        let mut rng = StdRng::seed_from_u64(9);
        let seeded_at = Utc::now();
        let mut fleet = vec![DeviceRecord::seed(0, &mut rng, seeded_at)];

        let ticked_at = seeded_at + chrono::Duration::seconds(1);
        tick_fleet(&mut fleet, &mut rng, ticked_at);
        assert_eq!(fleet[0].last_updated, ticked_at);
    }

    #[tokio::test]
    async fn test_simulator_snapshot() {
        let mut rng = StdRng::seed_from_u64(5);
        let sim = FleetSimulator::seed_with(&mut rng, Utc::now());

        assert_eq!(sim.count().await, FLEET_SIZE);

        let snapshot = sim.snapshot().await;
        assert_eq!(snapshot.len(), FLEET_SIZE);
        assert_eq!(snapshot[0].id, "HVAC-01");
        assert_eq!(snapshot[15].id, "HVAC-16");
    }

    #[tokio::test]
    async fn test_simulator_get() {
        let mut rng = StdRng::seed_from_u64(5);
        let sim = FleetSimulator::seed_with(&mut rng, Utc::now());

        assert!(sim.get("HVAC-05").await.is_some());
        assert!(sim.get("HVAC-99").await.is_none());

        let err = sim.require("HVAC-99").await.unwrap_err();
        assert!(matches!(err, FleetError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_simulator_tick_with() {
        let mut rng = StdRng::seed_from_u64(11);
        let sim = FleetSimulator::seed_with(&mut rng, Utc::now());
        let before = sim.snapshot().await;

        let now = Utc::now();
        sim.tick_with(&mut rng, now).await;

        let after = sim.snapshot().await;
        assert_eq!(after.len(), before.len());
        for device in &after {
            assert!(device.within_limits());
            assert_eq!(device.last_updated, now);
        }
    }
}
