//! Classification of fetch failures.

use thiserror::Error;

/// Failure taxonomy for the external fetch collaborators.
///
/// Failures are classified before they reach a reducer; the reduction
/// path only ever turns them into display text through the injected
/// error-message mapper and never raises on its own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The service could not be reached (timeout, DNS, reset connection).
    #[error("network error: {reason}")]
    Network { reason: String },

    /// The requested resource does not exist.
    #[error("'{resource}' not found")]
    NotFound { resource: String },

    /// Anything the collaborator could not classify.
    #[error("unknown error")]
    Unknown,
}
