//! Base trait for fetch results plus the generic per-fetch outcome.

use crate::domain::FetchError;

/// Marker trait for result events.
///
/// Results represent classified outcomes of asynchronous fetches:
/// - whole-entity fetches (character detail, search)
/// - per-field sub-fetches (planet, films, species)
///
/// Results are folded by reducers to produce new states. Classification
/// happens upstream; by the time a result reaches a reducer it already
/// distinguishes success, loading and error.
pub trait ViewResult: Send + 'static {}

/// Outcome of one asynchronous fetch.
///
/// Each entity family instantiates its own alias of this enum so that a
/// failure in one category can never leak into another's slice.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    /// The fetch was started.
    Loading,
    /// The fetch finished with a payload.
    Success(T),
    /// The fetch failed, pre-classified by the collaborator.
    Error(FetchError),
}
