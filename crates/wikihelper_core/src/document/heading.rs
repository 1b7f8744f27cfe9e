//! ATX heading recognition.
//!
//! # Responsibility
//! - Parse a single line into heading level and title.
//! - Decide title matches (case-insensitive, trimmed, exact).
//! - Decide section boundaries (level <= 2 ends a section body).
//!
//! # Invariants
//! - A heading requires whitespace between the `#` run and the title.
//! - Matching is exact on the trimmed title; no partial-word matches.

use once_cell::sync::Lazy;
use regex::Regex;

/// Heading levels at or above this end a section body.
const SECTION_BOUNDARY_LEVEL: usize = 2;

static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(#{1,6})\s+(.*?)\s*$").expect("valid heading regex"));

/// Parsed view of one ATX heading line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading<'a> {
    /// Number of leading `#` characters.
    pub level: usize,
    /// Title text with surrounding whitespace trimmed.
    pub title: &'a str,
}

/// Parses one line as an ATX heading.
///
/// Returns `None` for non-heading lines, including bare `#` runs without a
/// following title separator.
pub fn parse_heading(line: &str) -> Option<Heading<'_>> {
    let caps = HEADING_RE.captures(line)?;
    let level = caps.get(1).map_or(0, |m| m.as_str().len());
    let title = caps.get(2).map_or("", |m| m.as_str());
    Some(Heading { level, title })
}

/// Returns whether `line` is a heading for `title` at any level.
pub fn is_heading_for(line: &str, title: &str) -> bool {
    parse_heading(line)
        .map(|heading| heading.title.eq_ignore_ascii_case(title.trim()))
        .unwrap_or(false)
}

/// Returns whether `line` starts a new top-level region (level 1 or 2).
pub fn is_section_boundary(line: &str) -> bool {
    parse_heading(line)
        .map(|heading| heading.level <= SECTION_BOUNDARY_LEVEL)
        .unwrap_or(false)
}
