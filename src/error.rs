//! Error types
//!
//! Two families:
//! - [`BaroError`]: malformed static tables. Fatal, raised at load time.
//! - [`ServiceError`]: a collaborator (weather, news, ...) could not answer.
//!   Always recovered inside the dispatcher.

use thiserror::Error;

/// Static configuration problems detected while loading the language tables
#[derive(Debug, Error)]
pub enum BaroError {
    /// A question pattern does not compile
    #[error("invalid question pattern '{kind}': {source}")]
    InvalidPattern {
        kind: String,
        #[source]
        source: regex::Error,
    },

    /// A question pattern has nothing to extract the topic from
    #[error("question pattern '{0}' has no capture group")]
    MissingCapture(String),

    /// A synonym phrase normalizes to the empty string
    #[error("empty synonym phrase for intent '{0}'")]
    EmptySynonym(String),
}

/// Failure reported by an external collaborator
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    /// The collaborator answered, but has nothing for this request
    #[error("not found: {0}")]
    NotFound(String),

    /// The collaborator is disabled or cannot be reached
    #[error("service unavailable: {0}")]
    Unavailable(String),

    /// Network-level failure
    #[error("transport error: {0}")]
    Transport(String),

    /// The collaborator answered with something we could not read
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
