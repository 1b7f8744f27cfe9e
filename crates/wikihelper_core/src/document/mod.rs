//! Section-addressable document engine.
//!
//! # Responsibility
//! - Parse wiki documents into header-delimited sections.
//! - Provide pure mutations: extract, replace, prepend, date-keyed merge.
//! - Parse and apply bundled multi-section generation replies.
//!
//! # Invariants
//! - Every mutation takes a document value and returns a new one; nothing
//!   here holds shared mutable state.
//! - A mutation never rewrites bytes outside the addressed section.
//! - No operation in this module fails: absent sections are created,
//!   malformed input is a logged no-op.

pub mod bundle;
pub mod daily_log;
pub mod heading;
pub mod section;

/// Splits a document into lines on `\n`.
///
/// A trailing newline yields a final empty element, so `join("\n")` on the
/// unchanged slice reproduces the input byte for byte.
pub(crate) fn doc_lines(doc: &str) -> Vec<&str> {
    doc.split('\n').collect()
}
