//! Domain model for section-structured project wikis.
//!
//! # Responsibility
//! - Define the data shapes shared by the document engine and services.
//! - Keep wiki-wide constants (section titles, sentinels) in one place.
//!
//! # Invariants
//! - Sections are derived views over document text, never persisted on
//!   their own.
//! - A `LogEntry` date is always a valid calendar date.

pub mod section;

pub use section::{LogEntry, Section};

/// Title of the date-keyed append-only section.
pub const DAILY_LOG_TITLE: &str = "Daily Log";

/// Exact reply the generation step uses to signal "nothing to add" for the
/// Daily Log. Compared case-sensitively after trimming.
pub const NO_NEW_ENTRIES_SENTINEL: &str = "No new log entries from this meeting.";

/// Block content marking "no change" inside a bundled multi-section reply.
pub const EMPTY_BLOCK_SENTINEL: &str = "<empty>";

/// Trailing window length used when collecting recent log entries.
pub const RECENT_WINDOW_DAYS: u64 = 7;
