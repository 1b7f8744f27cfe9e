//! Section locator and mutators.
//!
//! # Responsibility
//! - Find the header line and body span for a titled section.
//! - Extract, replace, and prepend section bodies without touching the rest
//!   of the document.
//!
//! # Invariants
//! - The first matching header wins; later duplicates are inert.
//! - A body ends before the first subsequent heading of level <= 2, or at
//!   end of document.
//! - `replace_section` normalizes the addressed section to: header line,
//!   one blank line, trimmed body, one blank line. Replacing a section with
//!   its own content is a fixed point.
//! - A missing section is appended as `## {title}` at the end of the
//!   document, never reported as an error.

use crate::document::heading::{is_heading_for, is_section_boundary, parse_heading};
use crate::document::doc_lines;
use crate::model::Section;
use log::debug;

/// Line span of a located section. `body_end` is exclusive and points at the
/// next section boundary or one past the last line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SectionSpan {
    pub header_idx: usize,
    pub body_start: usize,
    pub body_end: usize,
}

/// Scans for the first header matching `title` and the extent of its body.
pub(crate) fn locate_span(lines: &[&str], title: &str) -> Option<SectionSpan> {
    let header_idx = lines.iter().position(|line| is_heading_for(line, title))?;
    let body_start = header_idx + 1;
    let body_end = lines[body_start..]
        .iter()
        .position(|line| is_section_boundary(line))
        .map_or(lines.len(), |offset| body_start + offset);
    Some(SectionSpan {
        header_idx,
        body_start,
        body_end,
    })
}

/// Resolves the section named `title`, if present.
///
/// The returned value is a derived view; it does not track later edits to
/// the document.
pub fn locate(doc: &str, title: &str) -> Option<Section> {
    let lines = doc_lines(doc);
    let span = locate_span(&lines, title)?;
    let header_line = lines[span.header_idx].to_string();
    let level = parse_heading(&header_line).map_or(0, |heading| heading.level);
    let body = lines[span.body_start..span.body_end]
        .join("\n")
        .trim()
        .to_string();
    Some(Section {
        header_line,
        level,
        body,
    })
}

/// Returns the trimmed body of the section named `title`, or an empty
/// string when the section does not exist.
pub fn extract_section(doc: &str, title: &str) -> String {
    locate(doc, title).map_or_else(String::new, |section| section.body)
}

/// Replaces the body of the section named `title` with `trim(body)`.
///
/// The header line is kept verbatim and all other sections stay
/// byte-identical. When the section is absent, a new level-2 section is
/// appended at the end of the document instead.
pub fn replace_section(doc: &str, title: &str, body: &str) -> String {
    let body = body.trim();
    let lines = doc_lines(doc);
    let Some(span) = locate_span(&lines, title) else {
        debug!("event=section_append module=document title={title}");
        return append_new_section(doc, title, body);
    };

    let mut out: Vec<&str> = Vec::with_capacity(lines.len());
    out.extend_from_slice(&lines[..=span.header_idx]);
    out.push("");
    out.extend(body.split('\n'));
    out.push("");
    if span.body_end == lines.len() {
        // One blank line before end of document, same as before a boundary.
        out.push("");
    } else {
        out.extend_from_slice(&lines[span.body_end..]);
    }
    out.join("\n")
}

/// Inserts `trim(text)` at the top of the section named `title`, after the
/// header line and any header-adjacent blank lines, followed by one blank
/// line. Prior body content keeps its position below the insertion.
///
/// When the section is absent this behaves like [`replace_section`] and
/// creates it with only the new text.
pub fn append_under_heading(doc: &str, title: &str, text: &str) -> String {
    let text = text.trim();
    let lines = doc_lines(doc);
    let Some(span) = locate_span(&lines, title) else {
        debug!("event=section_append module=document title={title}");
        return append_new_section(doc, title, text);
    };

    let mut insert_at = span.body_start;
    while insert_at < span.body_end && lines[insert_at].trim().is_empty() {
        insert_at += 1;
    }

    let mut out: Vec<&str> = Vec::with_capacity(lines.len() + 2);
    out.extend_from_slice(&lines[..insert_at]);
    out.extend(text.split('\n'));
    out.push("");
    out.extend_from_slice(&lines[insert_at..]);
    out.join("\n")
}

/// Appends a fresh `## {title}` section holding `body` (already trimmed by
/// callers) at the end of the document.
pub(crate) fn append_new_section(doc: &str, title: &str, body: &str) -> String {
    let doc = doc.trim();
    if doc.is_empty() {
        format!("## {title}\n{body}\n")
    } else {
        format!("{doc}\n\n## {title}\n{body}\n")
    }
}
