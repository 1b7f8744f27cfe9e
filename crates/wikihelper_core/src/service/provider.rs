//! Generation collaborator contract.
//!
//! # Responsibility
//! - Define the trait the network layer implements to produce suggestions.
//! - Give transport and API failures a typed shape at the boundary.
//!
//! # Invariants
//! - Implementations decode the provider reply once; the rest of the crate
//!   only ever sees content text or an explicit failure reason.
//! - The core ships no HTTP implementation; tests use mocks.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure reason from the generation collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestError {
    /// Request never produced a reply (connectivity, timeout).
    Transport(String),
    /// Endpoint answered with a non-success status.
    Api { status: u16, detail: String },
    /// Endpoint answered successfully but carried no content.
    EmptyResponse,
}

impl Display for SuggestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(detail) => write!(f, "generation request failed: {detail}"),
            Self::Api { status, detail } => {
                write!(f, "generation endpoint returned status {status}: {detail}")
            }
            Self::EmptyResponse => write!(f, "generation endpoint returned no content"),
        }
    }
}

impl Error for SuggestError {}

/// Produces free text for a prompt.
///
/// Implemented by the (out-of-crate) network layer and by test mocks.
pub trait SuggestionProvider {
    fn suggest(&self, prompt: &str) -> Result<String, SuggestError>;
}
