//! Line classification
//!
//! Turns one raw server log line into a typed chat event, or discards it.
//!
//! The log grammar this targets is fixed:
//!
//! `[12:00:00] [Server thread/INFO]: <payload>`
//!
//! optionally with a ` [Not Secure]` qualifier after the marker when chat signing is
//! disabled. Classification is literal substring matching; there is no locale handling.
//!
//! The pipeline for a single line is:
//!
//! normalize_line
//! marker check
//! blacklist check
//! chat / emote prefix
//! announcement heuristics (join/leave, challenge, advancement, death)
//!
//! Callers only depend on the `LineClassifier` trait so the heuristics can be swapped
//! for a stricter grammar later.

mod classifier;
mod constants;
mod types;

#[cfg(test)]
mod tests;

pub use classifier::{LineClassifier, MinecraftLogClassifier, normalize_line};
pub use constants::{BLACKLIST, DEATH_MARKERS, SERVER_INFO, SERVER_INFO_NOT_SECURE};
pub use types::{AdvancementKind, Classification, ClassifiedEvent, DiscardReason};
