//! Reducer for the search screen.

use crate::mapper::{CharacterModelMapper, DisplayErrorMessages, ErrorMessageMapper, ModelMapper};
use crate::mvi::{Reducer, SliceState};

use super::result::SearchViewResult;
use super::state::SearchViewState;

/// Folds search-screen results into the state tree.
#[derive(Debug, Default)]
pub struct SearchViewStateReducer<E = DisplayErrorMessages> {
    characters: CharacterModelMapper,
    messages: E,
}

impl<E: ErrorMessageMapper> SearchViewStateReducer<E> {
    pub fn new(characters: CharacterModelMapper, messages: E) -> Self {
        Self {
            characters,
            messages,
        }
    }
}

impl<E: ErrorMessageMapper> Reducer for SearchViewStateReducer<E> {
    type State = SearchViewState;
    type Result = SearchViewResult;

    fn reduce(&self, state: Self::State, result: Self::Result) -> Self::State {
        match result {
            SearchViewResult::Searching => SearchViewState {
                results: SliceState::Loading,
                ..state
            },

            SearchViewResult::SearchSuccess(characters) => SearchViewState {
                results: SliceState::Success(self.characters.map_list(&characters)),
                ..state
            },

            SearchViewResult::SearchError(error) => SearchViewState {
                results: SliceState::Error(self.messages.message(&error)),
                ..state
            },

            SearchViewResult::HistoryLoaded(characters) => SearchViewState {
                history: SliceState::Success(self.characters.map_list(&characters)),
                ..state
            },

            SearchViewResult::HistoryCleared => SearchViewState {
                // Cleared is new information: a loaded, empty history.
                history: SliceState::Success(Vec::new()),
                ..state
            },
        }
    }
}
