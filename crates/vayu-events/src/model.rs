use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use vayu_types::EventKind;

/// 事件引用的设备编号跨度（`HVAC-01`..`HVAC-16`）
///
/// 与机队的实际规模解耦：机队若改变规模，事件编号不会跟随
pub const DEVICE_ID_SPAN: u32 = 16;

/// 固定的事件消息目录
pub const MESSAGE_CATALOG: [&str; 7] = [
    "High CO₂ detected",
    "Manual override activated",
    "Temperature setpoint adjusted",
    "Filter maintenance required",
    "Energy optimization applied",
    "Occupancy pattern detected",
    "System performance optimal",
];

/// 系统事件
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SystemEvent {
    /// 事件 ID（由时间派生）
    pub id: String,

    /// 关联设备 ID（非真实外键）
    pub device_id: String,

    /// 事件消息
    pub message: String,

    /// 事件级别
    pub kind: EventKind,

    /// 发生时间
    pub timestamp: DateTime<Utc>,
}

impl SystemEvent {
    pub fn new(
        device_id: impl Into<String>,
        message: impl Into<String>,
        kind: EventKind,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: format!("evt-{}", timestamp.timestamp_millis()),
            device_id: device_id.into(),
            message: message.into(),
            kind,
            timestamp,
        }
    }

    /// 生成一条合成事件
    ///
    /// 设备编号在 1..=16 上均匀，消息与级别在各自目录上均匀
    pub fn synthetic(rng: &mut impl Rng, now: DateTime<Utc>) -> Self {
        let device_no = rng.gen_range(1..=DEVICE_ID_SPAN);
        let message = MESSAGE_CATALOG[rng.gen_range(0..MESSAGE_CATALOG.len())];
        let kind = EventKind::ALL[rng.gen_range(0..EventKind::ALL.len())];

        Self::new(format!("HVAC-{:02}", device_no), message, kind, now)
    }
}
