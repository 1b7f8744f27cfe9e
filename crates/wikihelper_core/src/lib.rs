//! Core domain logic for the AI project-wiki helper.
//!
//! A wiki is one Markdown document per project, divided into `##` sections,
//! with a date-keyed `## Daily Log` section maintained by generated entries.
//! This crate owns the section-addressable document engine, the prompt
//! templates, the storage contract, and the use-case services; the GUI,
//! HTTP transport, and Markdown rendering live outside it.

pub mod config;
pub mod document;
pub mod logging;
pub mod model;
pub mod prompt;
pub mod service;
pub mod store;

pub use config::{ConfigError, WikiConfig};
pub use document::bundle::{apply_bundled_response, parse_bundled_response, BundledBlock};
pub use document::daily_log::{collect_recent_log_entries, merge_daily_log_entry};
pub use document::section::{append_under_heading, extract_section, locate, replace_section};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::{
    LogEntry, Section, DAILY_LOG_TITLE, EMPTY_BLOCK_SENTINEL, NO_NEW_ENTRIES_SENTINEL,
    RECENT_WINDOW_DAYS,
};
pub use service::provider::{SuggestError, SuggestionProvider};
pub use service::wiki_service::{WikiService, WikiServiceError};
pub use store::{project_template, FsWikiStore, StoreError, StoreResult, WikiStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
