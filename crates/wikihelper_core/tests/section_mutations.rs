use wikihelper_core::{append_under_heading, extract_section, locate, replace_section};

const DOC: &str = "# Project: demo\n\n## Overview\n\nOld text\n\n## Goals\n\nG1\n\n## Daily Log\n";

#[test]
fn extract_missing_section_is_empty_string() {
    assert_eq!(extract_section(DOC, "Risks"), "");
    assert_eq!(extract_section("", "Anything"), "");
}

#[test]
fn extract_after_replace_returns_trimmed_body() {
    let body = "  line one\nline two  \n";
    let updated = replace_section(DOC, "Goals", body);
    assert_eq!(extract_section(&updated, "Goals"), "line one\nline two");
}

#[test]
fn replace_is_idempotent() {
    let once = replace_section(DOC, "Overview", "New text");
    let twice = replace_section(&once, "Overview", "New text");
    assert_eq!(once, twice);
}

#[test]
fn replace_does_not_interfere_with_other_sections() {
    let updated = replace_section(DOC, "Overview", "New text");
    assert_eq!(extract_section(&updated, "Goals"), extract_section(DOC, "Goals"));
    assert_eq!(
        extract_section(&updated, "Daily Log"),
        extract_section(DOC, "Daily Log")
    );
}

#[test]
fn replace_existing_section_matches_documented_shape() {
    let doc = "## Overview\n\nOld text\n\n## Goals\n\nG1\n";
    assert_eq!(
        replace_section(doc, "Overview", "New text"),
        "## Overview\n\nNew text\n\n## Goals\n\nG1\n"
    );
}

#[test]
fn replace_missing_section_appends_level_two_header() {
    let doc = "## Overview\n\nO\n";
    assert_eq!(
        replace_section(doc, "Risks", "R1"),
        "## Overview\n\nO\n\n## Risks\nR1\n"
    );
}

#[test]
fn section_title_match_ignores_case_and_level() {
    let doc = "### overview\nbody\n";
    assert_eq!(extract_section(doc, "Overview"), "body");
    let section = locate(doc, "OVERVIEW").expect("should locate");
    assert_eq!(section.header_line, "### overview");
    assert_eq!(section.level, 3);
}

#[test]
fn first_matching_header_wins_for_duplicates() {
    let doc = "## Notes\nfirst\n\n## Notes\nsecond\n";
    let updated = replace_section(doc, "Notes", "revised");
    assert_eq!(
        updated,
        "## Notes\n\nrevised\n\n## Notes\nsecond\n"
    );
}

#[test]
fn append_under_heading_prepends_new_content() {
    let doc = "## Daily Log\n\nexisting body\n\n## Links\nL\n";
    let updated = append_under_heading(doc, "Daily Log", "fresh content");
    assert_eq!(
        updated,
        "## Daily Log\n\nfresh content\n\nexisting body\n\n## Links\nL\n"
    );
}

#[test]
fn append_under_heading_falls_back_to_section_creation() {
    let doc = "## Overview\n\nO\n";
    assert_eq!(
        append_under_heading(doc, "Decisions", "D1"),
        "## Overview\n\nO\n\n## Decisions\nD1\n"
    );
}

#[test]
fn mutations_tolerate_documents_without_trailing_newline() {
    let doc = "## Overview\nOld";
    let updated = replace_section(doc, "Overview", "New");
    assert_eq!(extract_section(&updated, "Overview"), "New");
}
