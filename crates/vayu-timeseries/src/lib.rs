pub mod generator;
pub mod model;
pub mod query;
pub mod series;
pub mod store;

pub use model::{SensorReading, TrendPoint, READING_LOG_CAPACITY};
pub use query::{paginate, Page, PAGE_SIZE};
pub use series::EnvSeries;
pub use store::SeriesStore;
