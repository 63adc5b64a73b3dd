pub mod bus;
pub mod ticker;

pub use bus::{EventBus, SharedEventBus};
pub use ticker::{Ticker, TickerHandle};

pub fn init() {
    tracing::info!("Simulation core initialized");
}
