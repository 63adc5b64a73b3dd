use serde::{Deserialize, Serialize};

/// 系统事件级别
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// 信息
    Info,
    /// 警告
    Warning,
    /// 告警
    Alert,
}

impl EventKind {
    pub fn as_str(&self) -> &str {
        match self {
            EventKind::Info => "info",
            EventKind::Warning => "warning",
            EventKind::Alert => "alert",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "warning" => EventKind::Warning,
            "alert" => EventKind::Alert,
            _ => EventKind::Info,
        }
    }

    /// 全部事件级别（用于随机生成）
    pub const ALL: [EventKind; 3] = [EventKind::Info, EventKind::Warning, EventKind::Alert];
}
