use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 总线消息
///
/// 模拟器在每个 tick 之后把快照以 JSON 负载的形式发布到总线上
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub topic: String,
    pub payload: serde_json::Value,
    pub timestamp: i64,
}

impl Message {
    pub fn new(topic: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            id: Uuid::new_v4(),
            topic: topic.into(),
            payload,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_new() {
        let msg = Message::new("fleet/update", json!({"count": 16}));
        assert_eq!(msg.topic, "fleet/update");
        assert_eq!(msg.payload["count"], 16);
        assert!(msg.timestamp > 0);
    }
}
