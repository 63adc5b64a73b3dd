use std::sync::Arc;
use tokio::sync::broadcast;
use vayu_types::Message;

/// 快照总线
///
/// 模拟器发布，展示端订阅；彼此之间没有状态共享
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<Message>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Message> {
        self.sender.subscribe()
    }

    pub fn publish(&self, message: Message) -> Result<usize, broadcast::error::SendError<Message>> {
        self.sender.send(message)
    }

    /// 当前订阅者数量
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

pub type SharedEventBus = Arc<EventBus>;
