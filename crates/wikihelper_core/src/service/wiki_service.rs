//! Wiki use-case service.
//!
//! # Responsibility
//! - Drive one generation round trip per user action: update a section,
//!   update several sections at once, or summarize the past week.
//! - Persist the resulting document through the store.
//!
//! # Invariants
//! - `Daily Log` suggestions go through the merge engine, everything else
//!   through whole-section replace.
//! - The document is saved only after a suggestion was applied; refused
//!   merges (sentinel, malformed) still save the unchanged document,
//!   keeping save semantics uniform for callers.
//! - Summarization never mutates the document.

use crate::document::bundle::apply_bundled_response;
use crate::document::daily_log::{collect_recent_log_entries, merge_daily_log_entry};
use crate::document::section::{extract_section, replace_section};
use crate::model::DAILY_LOG_TITLE;
use crate::prompt::{
    build_daily_log_prompt, build_multi_section_prompt, build_section_prompt,
    build_weekly_summary_prompt,
};
use crate::service::provider::{SuggestError, SuggestionProvider};
use crate::store::{StoreError, WikiStore};
use chrono::NaiveDate;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for wiki use-cases.
#[derive(Debug)]
pub enum WikiServiceError {
    /// Storage-layer failure.
    Store(StoreError),
    /// Generation collaborator failure.
    Suggest(SuggestError),
    /// Target project has no wiki file.
    ProjectNotFound(String),
    /// Collaborator replied with only whitespace.
    EmptySuggestion,
    /// Daily Log section is empty; nothing to summarize.
    EmptyDailyLog,
    /// No dated entries fall inside the summary window.
    NoRecentEntries,
}

impl Display for WikiServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Suggest(err) => write!(f, "{err}"),
            Self::ProjectNotFound(project) => write!(f, "project not found: `{project}`"),
            Self::EmptySuggestion => write!(f, "generation returned an empty suggestion"),
            Self::EmptyDailyLog => write!(f, "the Daily Log section is empty"),
            Self::NoRecentEntries => write!(f, "no log entries found from the last 7 days"),
        }
    }
}

impl Error for WikiServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Suggest(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for WikiServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<SuggestError> for WikiServiceError {
    fn from(value: SuggestError) -> Self {
        Self::Suggest(value)
    }
}

/// Use-case facade over a store and a suggestion provider.
pub struct WikiService<S: WikiStore, P: SuggestionProvider> {
    store: S,
    provider: P,
}

impl<S: WikiStore, P: SuggestionProvider> WikiService<S, P> {
    pub fn new(store: S, provider: P) -> Self {
        Self { store, provider }
    }

    /// Updates one section of a project wiki from a meeting transcript and
    /// returns the saved document.
    pub fn update_section(
        &self,
        project: &str,
        transcript: &str,
        target_section: &str,
        today: NaiveDate,
    ) -> Result<String, WikiServiceError> {
        let doc = self.load_required(project)?;
        let prompt = if target_section == DAILY_LOG_TITLE {
            build_daily_log_prompt(project, transcript, today)
        } else {
            build_section_prompt(project, transcript, target_section, &doc)
        };
        let suggestion = self.provider.suggest(&prompt)?;
        if suggestion.trim().is_empty() {
            return Err(WikiServiceError::EmptySuggestion);
        }

        let updated = if target_section == DAILY_LOG_TITLE {
            merge_daily_log_entry(&doc, &suggestion)
        } else {
            replace_section(&doc, target_section, &suggestion)
        };
        self.store.save(project, &updated)?;
        info!(
            "event=section_update module=service status=ok project={project} target={target_section}"
        );
        Ok(updated)
    }

    /// Updates several sections in one generation round trip and returns the
    /// saved document. Malformed reply blocks are skipped, not fatal.
    pub fn update_sections_bundled(
        &self,
        project: &str,
        transcript: &str,
        target_sections: &[&str],
        today: NaiveDate,
    ) -> Result<String, WikiServiceError> {
        let doc = self.load_required(project)?;
        let prompt = build_multi_section_prompt(project, transcript, target_sections, today, &doc);
        let suggestion = self.provider.suggest(&prompt)?;
        if suggestion.trim().is_empty() {
            return Err(WikiServiceError::EmptySuggestion);
        }

        let updated = apply_bundled_response(&doc, &suggestion, target_sections);
        self.store.save(project, &updated)?;
        info!(
            "event=bundled_update module=service status=ok project={project} targets={}",
            target_sections.len()
        );
        Ok(updated)
    }

    /// Summarizes the Daily Log entries of the trailing week. Read-only.
    pub fn weekly_summary(
        &self,
        project: &str,
        as_of: NaiveDate,
    ) -> Result<String, WikiServiceError> {
        let doc = self.load_required(project)?;
        let body = extract_section(&doc, DAILY_LOG_TITLE);
        if body.is_empty() {
            return Err(WikiServiceError::EmptyDailyLog);
        }
        let entries = collect_recent_log_entries(&body, as_of);
        if entries.is_empty() {
            return Err(WikiServiceError::NoRecentEntries);
        }

        let prompt = build_weekly_summary_prompt(&entries);
        let summary = self.provider.suggest(&prompt)?;
        info!(
            "event=weekly_summary module=service status=ok project={project} entries={}",
            entries.len()
        );
        Ok(summary.trim().to_string())
    }

    fn load_required(&self, project: &str) -> Result<String, WikiServiceError> {
        self.store
            .load(project)?
            .ok_or_else(|| WikiServiceError::ProjectNotFound(project.to_string()))
    }
}
