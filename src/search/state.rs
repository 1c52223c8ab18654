//! State tree for the search screen.

use crate::model::CharacterModel;
use crate::mvi::{SliceState, ViewState};

/// Immutable state tree for the search screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchViewState {
    /// Characters matching the current query. `Success` with an empty
    /// list means the search ran and found nothing; "no matches" copy
    /// is the subscriber's call.
    pub results: SliceState<Vec<CharacterModel>>,
    /// Recently opened characters, loaded by the host's history store.
    pub history: SliceState<Vec<CharacterModel>>,
}

impl ViewState for SearchViewState {}

impl SearchViewState {
    /// True while a search is in flight.
    pub fn is_searching(&self) -> bool {
        self.results.is_loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_state_has_initial_slices() {
        let state = SearchViewState::default();
        assert!(state.results.is_initial());
        assert!(state.history.is_initial());
        assert!(!state.is_searching());
    }
}
