pub mod error;
pub mod hub;
pub mod kpi;
pub mod metrics;
pub mod settings;

pub use error::{AnalyticsError, Result};
pub use hub::AnalyticsHub;
pub use kpi::KpiSnapshot;
pub use metrics::AiMetrics;
pub use settings::AiSettings;
