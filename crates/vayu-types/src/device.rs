use serde::{Deserialize, Serialize};

/// 空调运行模式
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AcStatus {
    /// 制冷
    Cooling,
    /// 制热
    Heating,
    /// 关闭
    Off,
    /// 自动
    Auto,
}

impl AcStatus {
    pub fn as_str(&self) -> &str {
        match self {
            AcStatus::Cooling => "cooling",
            AcStatus::Heating => "heating",
            AcStatus::Off => "off",
            AcStatus::Auto => "auto",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "cooling" => AcStatus::Cooling,
            "heating" => AcStatus::Heating,
            "auto" => AcStatus::Auto,
            _ => AcStatus::Off,
        }
    }

    /// 全部运行模式（用于随机播种）
    pub const ALL: [AcStatus; 4] = [
        AcStatus::Cooling,
        AcStatus::Heating,
        AcStatus::Off,
        AcStatus::Auto,
    ];
}

/// CO₂ 浓度等级
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Co2Level {
    /// 良好（< 800 ppm）
    Good,
    /// 中等（< 1200 ppm）
    Moderate,
    /// 偏高
    High,
}

impl Co2Level {
    /// 根据 ppm 浓度划分等级
    pub fn from_ppm(ppm: f64) -> Self {
        if ppm < 800.0 {
            Co2Level::Good
        } else if ppm < 1200.0 {
            Co2Level::Moderate
        } else {
            Co2Level::High
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Co2Level::Good => "Good",
            Co2Level::Moderate => "Moderate",
            Co2Level::High => "High",
        }
    }
}
