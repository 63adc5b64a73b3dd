use rand::Rng;
use serde::{Deserialize, Serialize};

/// 设备链路状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LinkStatus {
    Online,
    Warning,
    Offline,
}

impl LinkStatus {
    pub fn as_str(&self) -> &str {
        match self {
            LinkStatus::Online => "online",
            LinkStatus::Warning => "warning",
            LinkStatus::Offline => "offline",
        }
    }
}

/// 平面图上的设备标记
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DevicePin {
    pub id: String,
    pub location: String,
    /// 平面图横坐标（百分比）
    pub x: f64,
    /// 平面图纵坐标（百分比）
    pub y: f64,
    pub status: LinkStatus,
}

impl DevicePin {
    fn new(id: &str, location: &str, x: f64, y: f64, status: LinkStatus) -> Self {
        Self {
            id: id.to_string(),
            location: location.to_string(),
            x,
            y,
            status,
        }
    }
}

/// 设备状态板
///
/// 每个 tick 各标记独立地以 0.05 的概率退化为 warning/offline（各半），
/// 否则回到 online
pub struct StatusBoard {
    pins: Vec<DevicePin>,
}

impl StatusBoard {
    /// 固定的初始布局
    pub fn seeded() -> Self {
        let pins = vec![
            DevicePin::new("HVAC-01", "Conference Room A", 20.0, 30.0, LinkStatus::Online),
            DevicePin::new("HVAC-02", "Office Floor 1", 60.0, 20.0, LinkStatus::Online),
            DevicePin::new("HVAC-03", "Lobby", 40.0, 60.0, LinkStatus::Warning),
            DevicePin::new("HVAC-04", "Server Room", 80.0, 40.0, LinkStatus::Online),
            DevicePin::new("HVAC-05", "Break Room", 30.0, 80.0, LinkStatus::Offline),
            DevicePin::new("HVAC-06", "Office Floor 2", 70.0, 70.0, LinkStatus::Online),
        ];
        Self { pins }
    }

    /// 执行一次状态翻转
    pub fn tick(&mut self, rng: &mut impl Rng) {
        for pin in &mut self.pins {
            pin.status = if rng.gen_bool(0.05) {
                if rng.gen_bool(0.5) {
                    LinkStatus::Warning
                } else {
                    LinkStatus::Offline
                }
            } else {
                LinkStatus::Online
            };
        }
    }

    pub fn pins(&self) -> &[DevicePin] {
        &self.pins
    }
}

impl Default for StatusBoard {
    fn default() -> Self {
        Self::seeded()
    }
}
