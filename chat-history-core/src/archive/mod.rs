//! Rotated log archives
//!
//! Finds the gzip-compressed log files a server leaves behind on rotation and turns
//! each into an ordered list of raw lines. Rotation names files after the day they were
//! written (`2023-01-02-1.log.gz`), so lexical order is chronological order.

mod discover;
mod error;
mod reader;
mod types;


pub use discover::{DEBUG_LOG_PREFIX, discover_archives};
pub use error::ArchiveError;
pub use reader::{read_archive, read_lines, read_plain_log};
pub use types::{RawLine, SourcePosition};
