//! History assembly and buffering
//!
//! `aggregate_history` stitches every archive into one chronological `HistoryBuffer`
//! once at startup. `SessionBuffer` collects what happens live after that. Presentation
//! only ever reads from either.

mod aggregate;
mod buffer;
mod session;

#[cfg(test)]
mod tests;

pub use aggregate::{AggregateOptions, AggregateSummary, LATEST_LOG, aggregate_history};
pub use buffer::{HistoryBuffer, HistoryLimit};
pub use session::{SessionBuffer, SessionEntry, SessionEntryKind};
