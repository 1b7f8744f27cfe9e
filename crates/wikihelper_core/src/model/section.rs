//! Section and log-entry records.
//!
//! # Responsibility
//! - Represent a resolved header-delimited section of a wiki document.
//! - Represent one dated Daily Log sub-entry.
//!
//! # Invariants
//! - `Section::header_line` is the verbatim matched line, so a mutation can
//!   reconstruct the header unchanged.
//! - `Section::level` equals the number of leading `#` in `header_line`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Resolved view of one header-delimited section.
///
/// Derived on every lookup; holding one does not pin the underlying
/// document, which may be replaced wholesale by any mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Verbatim header line as found in the document.
    pub header_line: String,
    /// Number of leading `#` characters (1-6).
    pub level: usize,
    /// Trimmed body text between this header and the next section boundary.
    pub body: String,
}

/// One dated sub-entry of the Daily Log section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Calendar date parsed from the `### YYYY-MM-DD` header.
    pub date: NaiveDate,
    /// Trimmed entry text, without the date header line.
    pub text: String,
}

impl LogEntry {
    /// Creates an entry for one calendar date.
    pub fn new(date: NaiveDate, text: impl Into<String>) -> Self {
        Self {
            date,
            text: text.into(),
        }
    }
}
