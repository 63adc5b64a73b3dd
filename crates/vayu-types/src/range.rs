use serde::{Deserialize, Serialize};

/// 历史数据时间范围
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DateRange {
    /// 最近 24 小时
    #[serde(rename = "24h")]
    Last24h,
    /// 最近 7 天
    #[serde(rename = "7d")]
    Last7d,
    /// 最近 30 天
    #[serde(rename = "30d")]
    Last30d,
}

impl DateRange {
    /// 回溯的小时数
    pub fn hours_back(&self) -> i64 {
        match self {
            DateRange::Last24h => 24,
            DateRange::Last7d => 168,
            DateRange::Last30d => 720,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DateRange::Last24h => "24h",
            DateRange::Last7d => "7d",
            DateRange::Last30d => "30d",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "7d" => DateRange::Last7d,
            "30d" => DateRange::Last30d,
            _ => DateRange::Last24h,
        }
    }
}

impl Default for DateRange {
    fn default() -> Self {
        DateRange::Last24h
    }
}
