//! Use-case services over the document engine.
//!
//! # Responsibility
//! - Define the typed boundary to the generation collaborator.
//! - Orchestrate load -> prompt -> suggest -> apply -> save flows.
//!
//! # Invariants
//! - Services never hand untyped collaborator output into the document
//!   engine; replies are decoded to `Result<String, SuggestError>` first.

pub mod provider;
pub mod wiki_service;

pub use provider::{SuggestError, SuggestionProvider};
pub use wiki_service::{WikiService, WikiServiceError};
