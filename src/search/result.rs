//! Result events for the search screen.

use crate::domain::{Character, FetchError};
use crate::mvi::ViewResult;

/// Result events folded into the search state tree.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchViewResult {
    /// A query was submitted; results are on the way.
    Searching,
    /// The search finished. An empty list is a valid outcome.
    SearchSuccess(Vec<Character>),
    /// The search failed.
    SearchError(FetchError),
    /// Recent searches arrived from wherever the host keeps them.
    HistoryLoaded(Vec<Character>),
    /// The user wiped the recent-search history.
    HistoryCleared,
}

impl ViewResult for SearchViewResult {}
