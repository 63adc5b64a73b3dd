use crate::model::{limits, DeviceRecord};
use crate::{FleetError, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use vayu_types::AcStatus;

/// 手动控制请求
///
/// 温度设定值与风速目标都按钳位区间预先验证
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ControlRequest {
    /// 目标设备 ID
    pub device_id: String,

    /// 温度设定值（°C）
    pub temp_setpoint: f64,

    /// 风速目标（0-100）
    pub fan_speed: f64,
}

impl ControlRequest {
    pub fn new(device_id: impl Into<String>, temp_setpoint: f64, fan_speed: f64) -> Self {
        Self {
            device_id: device_id.into(),
            temp_setpoint,
            fan_speed,
        }
    }

    /// 验证请求参数
    ///
    /// # 错误
    /// * `Validation` - 设备 ID 为空或数值超出钳位区间
    pub fn validate(&self) -> Result<()> {
        if self.device_id.is_empty() {
            return Err(FleetError::validation("Device ID cannot be empty"));
        }

        if !limits::contains(self.temp_setpoint, limits::TEMP) {
            return Err(FleetError::validation(format!(
                "Temperature setpoint {} out of range [{}, {}]",
                self.temp_setpoint,
                limits::TEMP.0,
                limits::TEMP.1
            )));
        }

        if !limits::contains(self.fan_speed, limits::FAN) {
            return Err(FleetError::validation(format!(
                "Fan speed {} out of range [{}, {}]",
                self.fan_speed,
                limits::FAN.0,
                limits::FAN.1
            )));
        }

        Ok(())
    }
}

/// 对机队应用手动控制
///
/// 只覆盖目标设备的 `live_temp` 与 `fan_speed` 并强制 `ac_status = auto`，
/// 其余设备和字段保持不变；未知设备 ID 是 no-op
///
/// # 返回
/// 是否有设备被修改
pub fn apply(fleet: &mut [DeviceRecord], request: &ControlRequest) -> Result<bool> {
    request.validate()?;

    match fleet.iter_mut().find(|d| d.id == request.device_id) {
        Some(device) => {
            device.live_temp = request.temp_setpoint;
            device.fan_speed = request.fan_speed;
            device.ac_status = AcStatus::Auto;

            info!(
                device_id = %device.id,
                temp_setpoint = %request.temp_setpoint,
                fan_speed = %request.fan_speed,
                "Manual control applied"
            );
            Ok(true)
        }
        None => {
            warn!(device_id = %request.device_id, "Manual control target not found, ignoring");
            Ok(false)
        }
    }
}
