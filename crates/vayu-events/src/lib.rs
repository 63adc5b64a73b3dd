pub mod log;
pub mod model;

pub use log::{EventFeed, EventLog, EVENT_LOG_CAPACITY, EVENT_PROBABILITY};
pub use model::{SystemEvent, DEVICE_ID_SPAN, MESSAGE_CATALOG};
