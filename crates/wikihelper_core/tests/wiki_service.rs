use chrono::NaiveDate;
use std::cell::RefCell;
use wikihelper_core::{
    extract_section, FsWikiStore, SuggestError, SuggestionProvider, WikiService,
    WikiServiceError, WikiStore, NO_NEW_ENTRIES_SENTINEL,
};

struct MockProvider {
    replies: RefCell<Vec<Result<String, SuggestError>>>,
}

impl MockProvider {
    fn new(replies: Vec<Result<String, SuggestError>>) -> Self {
        Self {
            replies: RefCell::new(replies),
        }
    }

    fn replying(reply: &str) -> Self {
        Self::new(vec![Ok(reply.to_string())])
    }
}

impl SuggestionProvider for MockProvider {
    fn suggest(&self, prompt: &str) -> Result<String, SuggestError> {
        assert!(!prompt.trim().is_empty(), "service must never send a blank prompt");
        self.replies.borrow_mut().remove(0)
    }
}

fn service_with_project(
    dir: &tempfile::TempDir,
    provider: MockProvider,
) -> WikiService<FsWikiStore, MockProvider> {
    let store = FsWikiStore::new(dir.path());
    store.create_project("demo").expect("project should be created");
    WikiService::new(store, provider)
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date")
}

#[test]
fn update_section_replaces_and_persists() {
    let dir = tempfile::tempdir().expect("temp dir");
    let service = service_with_project(&dir, MockProvider::replying("Revised overview"));

    let updated = service
        .update_section("demo", "we discussed the overview", "Overview", today())
        .expect("update should succeed");
    assert_eq!(extract_section(&updated, "Overview"), "Revised overview");

    let persisted = FsWikiStore::new(dir.path())
        .load("demo")
        .expect("load should work")
        .expect("project should exist");
    assert_eq!(persisted, updated);
}

#[test]
fn update_daily_log_goes_through_the_merge_engine() {
    let dir = tempfile::tempdir().expect("temp dir");
    let service = service_with_project(
        &dir,
        MockProvider::replying("### 2024-01-15\n- agreed on scope"),
    );

    let updated = service
        .update_section("demo", "meeting notes", "Daily Log", today())
        .expect("update should succeed");
    assert_eq!(
        extract_section(&updated, "Daily Log"),
        "### 2024-01-15\n- agreed on scope"
    );
}

#[test]
fn daily_log_sentinel_reply_saves_an_unchanged_document() {
    let dir = tempfile::tempdir().expect("temp dir");
    let service = service_with_project(&dir, MockProvider::replying(NO_NEW_ENTRIES_SENTINEL));

    let before = FsWikiStore::new(dir.path())
        .load("demo")
        .expect("load should work")
        .expect("project should exist");
    let updated = service
        .update_section("demo", "nothing relevant", "Daily Log", today())
        .expect("update should succeed");
    assert_eq!(updated, before);
}

#[test]
fn missing_project_is_reported_before_any_generation_call() {
    let dir = tempfile::tempdir().expect("temp dir");
    let provider = MockProvider::new(vec![]);
    let service = WikiService::new(FsWikiStore::new(dir.path()), provider);

    let err = service
        .update_section("ghost", "transcript", "Overview", today())
        .expect_err("missing project must fail");
    assert!(matches!(err, WikiServiceError::ProjectNotFound(_)));
}

#[test]
fn whitespace_only_reply_is_an_empty_suggestion_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let service = service_with_project(&dir, MockProvider::replying("   \n "));

    let err = service
        .update_section("demo", "transcript", "Overview", today())
        .expect_err("blank reply must fail");
    assert!(matches!(err, WikiServiceError::EmptySuggestion));
}

#[test]
fn provider_errors_are_surfaced_typed() {
    let dir = tempfile::tempdir().expect("temp dir");
    let service = service_with_project(
        &dir,
        MockProvider::new(vec![Err(SuggestError::Api {
            status: 429,
            detail: "rate limited".to_string(),
        })]),
    );

    let err = service
        .update_section("demo", "transcript", "Overview", today())
        .expect_err("provider error must propagate");
    assert!(matches!(
        err,
        WikiServiceError::Suggest(SuggestError::Api { status: 429, .. })
    ));
}

#[test]
fn bundled_update_applies_each_block() {
    let dir = tempfile::tempdir().expect("temp dir");
    let service = service_with_project(
        &dir,
        MockProvider::replying(
            "Overview:\nBundled overview\n---\nGoals:\n<empty>\n---\nDaily Log:\n### 2024-01-15\n- bundled entry",
        ),
    );

    let updated = service
        .update_sections_bundled(
            "demo",
            "transcript",
            &["Overview", "Goals", "Daily Log"],
            today(),
        )
        .expect("bundled update should succeed");
    assert_eq!(extract_section(&updated, "Overview"), "Bundled overview");
    assert_eq!(extract_section(&updated, "Goals"), "");
    assert_eq!(
        extract_section(&updated, "Daily Log"),
        "### 2024-01-15\n- bundled entry"
    );
}

#[test]
fn weekly_summary_reads_without_mutating() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = FsWikiStore::new(dir.path());
    store.create_project("demo").expect("project should be created");
    let seeded = store
        .load("demo")
        .expect("load should work")
        .expect("project should exist");
    let with_log = wikihelper_core::merge_daily_log_entry(&seeded, "### 2024-01-14\n- shipped");
    store.save("demo", &with_log).expect("save should work");

    let service = WikiService::new(
        FsWikiStore::new(dir.path()),
        MockProvider::replying("- shipped the thing\n"),
    );
    let summary = service
        .weekly_summary("demo", today())
        .expect("summary should succeed");
    assert_eq!(summary, "- shipped the thing");

    let after = FsWikiStore::new(dir.path())
        .load("demo")
        .expect("load should work")
        .expect("project should exist");
    assert_eq!(after, with_log);
}

#[test]
fn weekly_summary_distinguishes_empty_log_from_stale_log() {
    let dir = tempfile::tempdir().expect("temp dir");
    let service = service_with_project(&dir, MockProvider::new(vec![]));
    let err = service
        .weekly_summary("demo", today())
        .expect_err("empty log must fail");
    assert!(matches!(err, WikiServiceError::EmptyDailyLog));

    let store = FsWikiStore::new(dir.path());
    let doc = store
        .load("demo")
        .expect("load should work")
        .expect("project should exist");
    let stale = wikihelper_core::merge_daily_log_entry(&doc, "### 2023-06-01\n- long ago");
    store.save("demo", &stale).expect("save should work");

    let err = service
        .weekly_summary("demo", today())
        .expect_err("stale log must fail");
    assert!(matches!(err, WikiServiceError::NoRecentEntries));
}
