use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 原始读数日志容量（实时前插表最多 100 条）
pub const READING_LOG_CAPACITY: usize = 100;

/// 传感器读数
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SensorReading {
    pub id: String,
    pub device_id: String,
    pub temperature: f64,
    pub humidity: f64,
    pub co2: f64,
    pub timestamp: DateTime<Utc>,
}

/// 图表采样点
///
/// 播种时与读数一一对应；之后随滑动窗口同步变化，不单独存储
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendPoint {
    pub temperature: f64,
    pub humidity: f64,
    pub co2: f64,
    pub timestamp: DateTime<Utc>,
}

impl TrendPoint {
    pub fn new(temperature: f64, humidity: f64, co2: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            temperature,
            humidity,
            co2,
            timestamp,
        }
    }
}

impl From<&SensorReading> for TrendPoint {
    fn from(reading: &SensorReading) -> Self {
        Self {
            temperature: reading.temperature,
            humidity: reading.humidity,
            co2: reading.co2,
            timestamp: reading.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_point_from_reading() {
        let reading = SensorReading {
            id: "reading-0".to_string(),
            device_id: "HVAC-01".to_string(),
            temperature: 22.5,
            humidity: 48.0,
            co2: 520.0,
            timestamp: Utc::now(),
        };

        let point = TrendPoint::from(&reading);
        assert_eq!(point.temperature, 22.5);
        assert_eq!(point.timestamp, reading.timestamp);
    }

    #[test]
    fn test_reading_timestamp_serializes_rfc3339() {
        let reading = SensorReading {
            id: "reading-1".to_string(),
            device_id: "HVAC-02".to_string(),
            temperature: 21.0,
            humidity: 50.0,
            co2: 430.0,
            timestamp: "2025-06-01T12:00:00Z".parse().unwrap(),
        };

        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(json["timestamp"], "2025-06-01T12:00:00Z");
    }
}
