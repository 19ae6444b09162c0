pub mod logs;
pub mod sink;
pub mod tracing;

pub use logs::{LogDirBuilder, chat, info};
pub use sink::RecordingSink;
pub use tracing::{CapturedEvent, capture_events};
