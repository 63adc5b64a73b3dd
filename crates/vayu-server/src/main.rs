use clap::Parser;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use vayu_analytics::AnalyticsHub;
use vayu_config::ConfigLoader;
use vayu_core::{EventBus, Ticker, TickerHandle};
use vayu_events::EventFeed;
use vayu_fleet::{FleetSimulator, StatusBoard};
use vayu_timeseries::SeriesStore;
use vayu_types::{DateRange, Message};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config directory (expects vayu.toml, optional)
    #[arg(short, long, default_value = ".")]
    config_dir: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    info!("Starting VAYU simulation server with config dir: {}", args.config_dir);

    vayu_core::init();

    let config = ConfigLoader::new(&args.config_dir).load()?;
    let bus = Arc::new(EventBus::new(config.bus_capacity));

    // 各模拟器独占自己的集合，互相之间没有共享状态
    let fleet = Arc::new(FleetSimulator::new());
    let board = Arc::new(RwLock::new(StatusBoard::seeded()));
    let events = Arc::new(EventFeed::new());
    let series = Arc::new(SeriesStore::new("HVAC-01", DateRange::Last24h));
    let analytics = Arc::new(AnalyticsHub::new());

    spawn_bus_logger(bus.clone());

    let mut handles: Vec<TickerHandle> = Vec::new();

    // 机队 + 状态板
    handles.push(Ticker::spawn("fleet", config.fleet.period(), {
        let fleet = fleet.clone();
        let board = board.clone();
        let bus = bus.clone();
        move || {
            let fleet = fleet.clone();
            let board = board.clone();
            let bus = bus.clone();
            async move {
                fleet.tick().await;
                {
                    let mut board = board.write().await;
                    let mut rng = rand::thread_rng();
                    board.tick(&mut rng);
                }
                publish(&bus, "fleet/update", &fleet.snapshot().await);
            }
        }
    }));

    // 事件流（有事件才发布）
    handles.push(Ticker::spawn("events", config.events.period(), {
        let events = events.clone();
        let bus = bus.clone();
        move || {
            let events = events.clone();
            let bus = bus.clone();
            async move {
                if let Some(event) = events.tick().await {
                    publish(&bus, "events/new", &event);
                }
            }
        }
    }));

    // 环境时序
    handles.push(Ticker::spawn("series", config.series.period(), {
        let series = series.clone();
        let bus = bus.clone();
        move || {
            let series = series.clone();
            let bus = bus.clone();
            async move {
                let reading = series.tick().await;
                publish(&bus, "series/append", &reading);
            }
        }
    }));

    // 总览 KPI
    handles.push(Ticker::spawn("kpi", config.kpi.period(), {
        let analytics = analytics.clone();
        let bus = bus.clone();
        move || {
            let analytics = analytics.clone();
            let bus = bus.clone();
            async move {
                analytics.tick_kpi().await;
                publish(&bus, "kpi/update", &analytics.kpi().await);
            }
        }
    }));

    // AI 指标
    handles.push(Ticker::spawn("ai-metrics", config.ai_metrics.period(), {
        let analytics = analytics.clone();
        let bus = bus.clone();
        move || {
            let analytics = analytics.clone();
            let bus = bus.clone();
            async move {
                analytics.tick_metrics().await;
                publish(&bus, "ai/metrics", &analytics.metrics().await);
            }
        }
    }));

    info!(tickers = handles.len(), "All simulators running");

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received");

    // 卸载路径上保证每个定时器都停止
    for handle in &handles {
        handle.stop().await;
    }

    info!("VAYU simulation server stopped");
    Ok(())
}

/// 把快照序列化后发布到总线
fn publish<T: serde::Serialize>(bus: &EventBus, topic: &str, snapshot: &T) {
    match serde_json::to_value(snapshot) {
        Ok(payload) => {
            if bus.publish(Message::new(topic, payload)).is_err() {
                debug!(topic = %topic, "No subscribers for snapshot");
            }
        }
        Err(e) => warn!(topic = %topic, error = %e, "Failed to serialize snapshot"),
    }
}

/// 订阅总线并记录流量
fn spawn_bus_logger(bus: Arc<EventBus>) {
    let mut rx = bus.subscribe();
    tokio::spawn(async move {
        while let Ok(msg) = rx.recv().await {
            match msg.topic.as_str() {
                "events/new" => info!(
                    device_id = %msg.payload["device_id"].as_str().unwrap_or("?"),
                    kind = %msg.payload["kind"].as_str().unwrap_or("?"),
                    message = %msg.payload["message"].as_str().unwrap_or("?"),
                    "System event"
                ),
                topic => debug!(topic = %topic, "Snapshot"),
            }
        }
    });
}
