use crate::model::SystemEvent;
use chrono::{DateTime, Utc};
use rand::Rng;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// 事件日志容量（最多保留 20 条最新事件）
pub const EVENT_LOG_CAPACITY: usize = 20;

/// 每个 tick 产生事件的概率
pub const EVENT_PROBABILITY: f64 = 0.3;

/// 事件日志
///
/// 只追加、有上限、新事件在前；溢出部分丢弃，从不单条删除
#[derive(Debug, Clone)]
pub struct EventLog {
    entries: Vec<SystemEvent>,
    capacity: usize,
}

impl EventLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// 前插一条事件并截断到容量
    pub fn record(&mut self, event: SystemEvent) {
        self.entries.insert(0, event);
        self.entries.truncate(self.capacity);
    }

    /// 执行一次 tick
    ///
    /// 以 `EVENT_PROBABILITY` 的概率生成并前插一条合成事件；
    /// 否则日志保持不变
    pub fn tick(&mut self, rng: &mut impl Rng, now: DateTime<Utc>) -> Option<SystemEvent> {
        if rng.gen_bool(EVENT_PROBABILITY) {
            let event = SystemEvent::synthetic(rng, now);
            debug!(event_id = %event.id, device_id = %event.device_id, "Event recorded");
            self.record(event.clone());
            Some(event)
        } else {
            None
        }
    }

    pub fn entries(&self) -> &[SystemEvent] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&SystemEvent> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(EVENT_LOG_CAPACITY)
    }
}

/// 事件流模拟器
///
/// 独占持有事件日志；视图只通过快照读取
pub struct EventFeed {
    log: Arc<RwLock<EventLog>>,
}

impl EventFeed {
    pub fn new() -> Self {
        Self {
            log: Arc::new(RwLock::new(EventLog::default())),
        }
    }

    /// 执行一次 tick（线程随机源 + 当前时间）
    pub async fn tick(&self) -> Option<SystemEvent> {
        let mut log = self.log.write().await;
        let mut rng = rand::thread_rng();
        log.tick(&mut rng, Utc::now())
    }

    /// 使用注入的随机源和时间执行一次 tick（用于确定性测试）
    pub async fn tick_with<R: Rng + Send>(
        &self,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Option<SystemEvent> {
        let mut log = self.log.write().await;
        log.tick(rng, now)
    }

    /// 日志快照（新事件在前）
    pub async fn snapshot(&self) -> Vec<SystemEvent> {
        self.log.read().await.entries().to_vec()
    }

    pub async fn len(&self) -> usize {
        self.log.read().await.len()
    }
}

impl Default for EventFeed {
    fn default() -> Self {
        Self::new()
    }
}
