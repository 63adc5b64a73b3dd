use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::interval;
use tracing::{debug, info, warn};

/// 周期驱动器
///
/// 每个模拟器由一个独立的重复定时器驱动；定时器之间互不依赖。
/// 挂载时启动，停机时通过共享运行标志保证退出。
pub struct Ticker;

/// 定时任务句柄
///
/// 持有运行标志；`stop` 之后循环在下一次检查时退出
pub struct TickerHandle {
    name: String,
    running: Arc<RwLock<bool>>,
}

impl Ticker {
    /// 启动周期任务
    ///
    /// # 参数
    /// * `name` - 任务名称（用于日志）
    /// * `period` - tick 间隔
    /// * `tick_fn` - 每个 tick 执行的闭包
    pub fn spawn<F, Fut>(name: impl Into<String>, period: Duration, mut tick_fn: F) -> TickerHandle
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let name = name.into();
        let running = Arc::new(RwLock::new(true));

        info!(task = %name, period = ?period, "Ticker started");

        let loop_name = name.clone();
        let loop_running = running.clone();
        tokio::spawn(async move {
            let mut ticker = interval(period);
            // 第一次 tick 立即返回，跳过它让周期从 period 之后开始
            ticker.tick().await;

            loop {
                ticker.tick().await;

                let is_running = *loop_running.read().await;
                if !is_running {
                    info!(task = %loop_name, "Ticker stopped");
                    break;
                }

                debug!(task = %loop_name, "Tick");
                tick_fn().await;
            }
        });

        TickerHandle { name, running }
    }
}

impl TickerHandle {
    /// 停止定时任务
    pub async fn stop(&self) {
        let mut running = self.running.write().await;
        if !*running {
            warn!(task = %self.name, "Ticker already stopped");
            return;
        }
        *running = false;
        info!(task = %self.name, "Ticker stopping...");
    }

    /// 是否仍在运行
    pub async fn is_running(&self) -> bool {
        *self.running.read().await
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
