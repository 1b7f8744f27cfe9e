//! Prompt templating for the generation collaborator.
//!
//! # Responsibility
//! - Render the fixed prompt texts used by every generation round trip.
//! - Embed current wiki content so the collaborator revises, not invents.
//!
//! # Invariants
//! - The daily-log prompt names the exact no-new-entries sentinel so the
//!   merge engine can recognize it verbatim.
//! - The multi-section prompt names the exact block format expected by the
//!   bundled response parser.

use crate::document::section::extract_section;
use crate::model::{LogEntry, DAILY_LOG_TITLE, EMPTY_BLOCK_SENTINEL, NO_NEW_ENTRIES_SENTINEL};
use chrono::NaiveDate;
use std::fmt::Write;

/// Builds the prompt asking for a revised body of one ordinary section.
pub fn build_section_prompt(
    project: &str,
    transcript: &str,
    target_section: &str,
    document: &str,
) -> String {
    let current = extract_section(document, target_section);
    let mut prompt = String::new();
    let _ = writeln!(
        prompt,
        "You are an AI assistant helping to maintain a project wiki."
    );
    let _ = writeln!(prompt, "Project: {project}");
    let _ = writeln!(prompt, "Target section to update: {target_section}");
    let _ = writeln!(
        prompt,
        "\nCurrent content of the '{target_section}' section:\n```\n{current}\n```"
    );
    let _ = writeln!(
        prompt,
        "\nInformation from the recent meeting (transcript):\n```\n{transcript}\n```"
    );
    let _ = writeln!(
        prompt,
        "\nReview the new information and suggest a complete, revised version of \
         the entire '{target_section}' section that integrates it."
    );
    let _ = writeln!(
        prompt,
        "Output ONLY the revised text that goes under the header. Do not include \
         the markdown header itself or any conversational preamble."
    );
    prompt
}

/// Builds the prompt asking for one dated Daily Log entry.
pub fn build_daily_log_prompt(project: &str, transcript: &str, today: NaiveDate) -> String {
    let mut prompt = String::new();
    let _ = writeln!(
        prompt,
        "You are an AI assistant that turns raw, informal notes into clean daily \
         log entries for a project wiki."
    );
    let _ = writeln!(prompt, "Project: {project}");
    let _ = writeln!(
        prompt,
        "Extract the key takeaways or activities from the notes below. Format the \
         output as a Markdown block starting with a level-3 header for today's \
         date ({today}), followed by a bulleted list of the key points."
    );
    let _ = writeln!(
        prompt,
        "Even if the text is short, do your best to summarize the main point."
    );
    let _ = writeln!(
        prompt,
        "If the text is truly empty or nonsensical, respond with \
         '{NO_NEW_ENTRIES_SENTINEL}'"
    );
    let _ = writeln!(prompt, "\nRaw notes:\n```\n{transcript}\n```");
    prompt
}

/// Builds the prompt summarizing the past week's log entries.
pub fn build_weekly_summary_prompt(entries: &[LogEntry]) -> String {
    let mut rendered = String::new();
    for entry in entries {
        let _ = writeln!(rendered, "### {}\n{}\n", entry.date, entry.text);
    }
    format!(
        "Please provide a concise, bullet-point summary of the key activities, \
         decisions, and blockers from the following daily log entries from the \
         past week:\n\n---\n{rendered}---"
    )
}

/// Builds the prompt covering several target sections in one round trip,
/// replied to in the bundled block format.
pub fn build_multi_section_prompt(
    project: &str,
    transcript: &str,
    targets: &[&str],
    today: NaiveDate,
    document: &str,
) -> String {
    let mut prompt = String::new();
    let _ = writeln!(
        prompt,
        "You are an AI assistant helping to maintain a project wiki."
    );
    let _ = writeln!(prompt, "Project: {project}");
    let _ = writeln!(
        prompt,
        "Update each of the following sections from the meeting transcript below."
    );
    for target in targets {
        if *target == DAILY_LOG_TITLE {
            let _ = writeln!(
                prompt,
                "- {DAILY_LOG_TITLE}: a Markdown block starting with a level-3 header \
                 for today's date ({today}), followed by bulleted key points."
            );
        } else {
            let current = extract_section(document, target);
            let _ = writeln!(
                prompt,
                "- {target}: a complete revised body for this section. Current \
                 content:\n```\n{current}\n```"
            );
        }
    }
    let _ = writeln!(
        prompt,
        "\nReply with one block per section, in the form 'SectionName:' on its own \
         line followed by the content, blocks separated by a line containing only \
         '---'. If a section needs no change, use '{EMPTY_BLOCK_SENTINEL}' as its \
         content. Do not add any other text."
    );
    let _ = writeln!(prompt, "\nTranscript:\n```\n{transcript}\n```");
    prompt
}

#[cfg(test)]
mod tests {
    use super::{build_daily_log_prompt, build_section_prompt, build_weekly_summary_prompt};
    use crate::model::LogEntry;
    use chrono::NaiveDate;

    #[test]
    fn section_prompt_embeds_current_body_and_transcript() {
        let doc = "## Goals\n\nG1\n";
        let prompt = build_section_prompt("demo", "we agreed on G2", "Goals", doc);
        assert!(prompt.contains("G1"));
        assert!(prompt.contains("we agreed on G2"));
        assert!(prompt.contains("'Goals'"));
    }

    #[test]
    fn daily_log_prompt_names_date_and_sentinel() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date");
        let prompt = build_daily_log_prompt("demo", "notes", today);
        assert!(prompt.contains("2024-01-15"));
        assert!(prompt.contains("No new log entries from this meeting."));
    }

    #[test]
    fn weekly_summary_prompt_renders_each_entry_header() {
        let entries = vec![
            LogEntry::new(
                NaiveDate::from_ymd_opt(2024, 1, 14).expect("valid date"),
                "- a",
            ),
            LogEntry::new(
                NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date"),
                "- b",
            ),
        ];
        let prompt = build_weekly_summary_prompt(&entries);
        assert!(prompt.contains("### 2024-01-14"));
        assert!(prompt.contains("### 2024-01-15"));
    }
}
