//! Bundled multi-section response parsing and application.
//!
//! # Responsibility
//! - Parse a single generation reply carrying updates for several sections.
//! - Route each block to the Daily Log merge engine or the section replacer.
//!
//! # Invariants
//! - Blocks are separated by lines containing only `---`.
//! - A block's first line is `Title:`; the title match against the allowed
//!   set is exact and case-sensitive.
//! - `<empty>` or fully blank content means "no change" for that block.
//! - A malformed or unknown block is skipped; it never aborts the rest of
//!   the batch.

use crate::document::daily_log::merge_daily_log_entry;
use crate::document::section::replace_section;
use crate::model::{DAILY_LOG_TITLE, EMPTY_BLOCK_SENTINEL};
use log::debug;

/// One well-formed block of a bundled reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundledBlock {
    /// Section title taken from the `Title:` line.
    pub title: String,
    /// Trimmed block content below the title line.
    pub content: String,
}

/// Splits a bundled reply into its well-formed, non-empty blocks.
///
/// Blocks without a `Title:` first line and blocks whose content is blank or
/// the `<empty>` sentinel are dropped.
pub fn parse_bundled_response(response: &str) -> Vec<BundledBlock> {
    response
        .split('\n')
        .collect::<Vec<_>>()
        .split(|line| line.trim() == "---")
        .filter_map(|block_lines| parse_block(&block_lines.join("\n")))
        .collect()
}

fn parse_block(block: &str) -> Option<BundledBlock> {
    let block = block.trim();
    let (title_line, content) = block.split_once('\n').unwrap_or((block, ""));
    let title = title_line.trim().strip_suffix(':')?.trim();
    if title.is_empty() {
        return None;
    }
    let content = content.trim();
    if content.is_empty() || content == EMPTY_BLOCK_SENTINEL {
        debug!("event=bundle_block module=document status=skip reason=empty title={title}");
        return None;
    }
    Some(BundledBlock {
        title: title.to_string(),
        content: content.to_string(),
    })
}

/// Applies a bundled reply to the document.
///
/// Only blocks whose title appears in `section_titles` are applied; `Daily
/// Log` blocks go through the merge engine, all others through
/// [`replace_section`]. The result is always a best-effort document.
pub fn apply_bundled_response(doc: &str, response: &str, section_titles: &[&str]) -> String {
    let mut doc = doc.to_string();
    for block in parse_bundled_response(response) {
        if !section_titles.iter().any(|title| *title == block.title) {
            debug!(
                "event=bundle_block module=document status=skip reason=unknown_title title={}",
                block.title
            );
            continue;
        }
        doc = if block.title == DAILY_LOG_TITLE {
            merge_daily_log_entry(&doc, &block.content)
        } else {
            replace_section(&doc, &block.title, &block.content)
        };
    }
    doc
}

#[cfg(test)]
mod tests {
    use super::{parse_bundled_response, BundledBlock};

    #[test]
    fn parses_blocks_split_on_separator_lines() {
        let blocks = parse_bundled_response("Goals:\nG2\n---\nOverview:\nNew overview");
        assert_eq!(
            blocks,
            vec![
                BundledBlock {
                    title: "Goals".to_string(),
                    content: "G2".to_string(),
                },
                BundledBlock {
                    title: "Overview".to_string(),
                    content: "New overview".to_string(),
                },
            ]
        );
    }

    #[test]
    fn skips_empty_sentinel_and_blank_blocks() {
        let blocks = parse_bundled_response("Goals:\n<empty>\n---\nOverview:\n\n---\nRisks:\nR1");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].title, "Risks");
    }

    #[test]
    fn skips_blocks_without_a_title_colon() {
        let blocks = parse_bundled_response("no colon here\nbody\n---\nGoals:\nG2");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].title, "Goals");
    }

    #[test]
    fn keeps_multiline_content() {
        let blocks = parse_bundled_response("Daily Log:\n### 2024-01-01\n- a\n- b");
        assert_eq!(blocks[0].content, "### 2024-01-01\n- a\n- b");
    }
}
