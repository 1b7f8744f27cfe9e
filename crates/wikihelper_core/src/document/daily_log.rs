//! Daily Log merge engine and trailing-window filter.
//!
//! # Responsibility
//! - Merge a dated contribution into the Daily Log section without ever
//!   duplicating a date header.
//! - Project the dated sub-entries inside a trailing calendar window.
//!
//! # Invariants
//! - Blank input, the no-new-entries sentinel, and contributions without a
//!   valid `### YYYY-MM-DD` first line leave the document unchanged.
//! - Same-date contributions are joined by a single line break; new dates
//!   are appended after one blank line, never reordering prior dates.
//! - The window filter mutates nothing and silently skips chunks whose
//!   header does not parse as a calendar date.

use crate::document::doc_lines;
use crate::document::heading::parse_heading;
use crate::document::section::{append_new_section, locate_span};
use crate::model::{LogEntry, DAILY_LOG_TITLE, NO_NEW_ENTRIES_SENTINEL, RECENT_WINDOW_DAYS};
use chrono::{Days, NaiveDate};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

static DATE_HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*###\s+(\d{4}-\d{2}-\d{2})\s*$").expect("valid date heading regex"));

/// Parses a `### YYYY-MM-DD` line into its calendar date.
///
/// Returns `None` for non-headings, other levels, and date-shaped strings
/// that are not real dates (e.g. `2024-13-40`).
fn parse_date_heading(line: &str) -> Option<NaiveDate> {
    let caps = DATE_HEADING_RE.captures(line)?;
    NaiveDate::parse_from_str(caps.get(1)?.as_str(), "%Y-%m-%d").ok()
}

fn is_entry_heading(line: &str) -> bool {
    parse_heading(line).map_or(false, |heading| heading.level == 3)
}

/// Merges one generated contribution into the Daily Log section.
///
/// The contribution must start with a `### YYYY-MM-DD` header; its remaining
/// lines are the entry body. The Daily Log section is created at the end of
/// the document when absent. All refusal paths return the input unchanged.
pub fn merge_daily_log_entry(doc: &str, contribution: &str) -> String {
    let trimmed = contribution.trim();
    if trimmed.is_empty() || trimmed == NO_NEW_ENTRIES_SENTINEL {
        debug!("event=daily_log_merge module=document status=noop reason=sentinel");
        return doc.to_string();
    }

    let mut contribution_lines = trimmed.split('\n');
    let first_line = contribution_lines.next().unwrap_or("");
    let Some(date) = parse_date_heading(first_line) else {
        // The generation contract requires a date header; violations are
        // dropped here rather than propagated.
        debug!("event=daily_log_merge module=document status=noop reason=missing_date_header");
        return doc.to_string();
    };
    let new_body = contribution_lines.collect::<Vec<_>>().join("\n");
    let new_body = new_body.trim();

    let lines = doc_lines(doc);
    let Some(span) = locate_span(&lines, DAILY_LOG_TITLE) else {
        debug!("event=daily_log_merge module=document status=ok created_section=true date={date}");
        return append_new_section(doc, DAILY_LOG_TITLE, trimmed);
    };

    let existing_entry = (span.body_start..span.body_end)
        .find(|&idx| parse_date_heading(lines[idx]) == Some(date));

    let mut out: Vec<&str> = Vec::with_capacity(lines.len() + 4);
    match existing_entry {
        Some(entry_idx) => {
            if new_body.is_empty() {
                return doc.to_string();
            }
            let entry_end = ((entry_idx + 1)..span.body_end)
                .find(|&idx| is_entry_heading(lines[idx]))
                .unwrap_or(span.body_end);
            // Append right after the entry's last non-blank line, keeping a
            // single line break between merged contributions.
            let mut insert_after = entry_idx;
            for idx in (entry_idx + 1)..entry_end {
                if !lines[idx].trim().is_empty() {
                    insert_after = idx;
                }
            }
            out.extend_from_slice(&lines[..=insert_after]);
            out.extend(new_body.split('\n'));
            out.extend_from_slice(&lines[insert_after + 1..]);
            debug!("event=daily_log_merge module=document status=ok merged_existing=true date={date}");
        }
        None => {
            // New date: append after the section's existing content,
            // separated by one blank line.
            let mut insert_after = span.header_idx;
            for idx in span.body_start..span.body_end {
                if !lines[idx].trim().is_empty() {
                    insert_after = idx;
                }
            }
            out.extend_from_slice(&lines[..=insert_after]);
            out.push("");
            out.push(first_line.trim());
            if !new_body.is_empty() {
                out.extend(new_body.split('\n'));
            }
            out.extend_from_slice(&lines[insert_after + 1..]);
            debug!("event=daily_log_merge module=document status=ok merged_existing=false date={date}");
        }
    }
    out.join("\n")
}

/// Collects the dated sub-entries of a Daily Log body that fall within the
/// trailing window `[as_of - 7 days, as_of]`, both ends inclusive.
///
/// Chunks start at level-3 headings; text before the first heading and
/// chunks without a parsable date are skipped. Pure projection, no mutation.
pub fn collect_recent_log_entries(daily_log_body: &str, as_of: NaiveDate) -> Vec<LogEntry> {
    let window_start = as_of
        .checked_sub_days(Days::new(RECENT_WINDOW_DAYS))
        .unwrap_or(NaiveDate::MIN);

    let mut entries = Vec::new();
    let mut current_date: Option<NaiveDate> = None;
    let mut current_text: Vec<&str> = Vec::new();

    let mut flush = |date: Option<NaiveDate>, text: &mut Vec<&str>| {
        if let Some(date) = date {
            if date >= window_start && date <= as_of {
                entries.push(LogEntry::new(date, text.join("\n").trim()));
            }
        }
        text.clear();
    };

    for line in daily_log_body.split('\n') {
        if is_entry_heading(line) {
            flush(current_date.take(), &mut current_text);
            current_date = parse_date_heading(line);
        } else if current_date.is_some() {
            current_text.push(line);
        }
    }
    flush(current_date, &mut current_text);

    entries
}
