pub mod device;
pub mod event;
pub mod message;
pub mod range;

pub use device::{AcStatus, Co2Level};
pub use event::EventKind;
pub use message::Message;
pub use range::DateRange;
