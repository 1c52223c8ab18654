//! Reducer for the character-detail screen.

use crate::mapper::{
    CharacterModelMapper, DisplayErrorMessages, ErrorMessageMapper, FilmModelMapper, ModelMapper,
    PlanetModelMapper, SpecieModelMapper,
};
use crate::mvi::{FetchOutcome, Reducer, SliceState};

use super::result::DetailViewResult;
use super::state::{DetailSessionState, DetailViewState};

/// Folds detail-screen results into the state tree.
///
/// Pure: mappers are applied to success payloads, the error formatter to
/// failures, and unchanged branches are copied through with struct
/// update. Collaborators come in by constructor, so the fold itself
/// carries no display wording.
#[derive(Debug, Default)]
pub struct DetailViewStateReducer<E = DisplayErrorMessages> {
    planets: PlanetModelMapper,
    species: SpecieModelMapper,
    films: FilmModelMapper,
    characters: CharacterModelMapper,
    messages: E,
}

impl<E: ErrorMessageMapper> DetailViewStateReducer<E> {
    pub fn new(
        planets: PlanetModelMapper,
        species: SpecieModelMapper,
        films: FilmModelMapper,
        characters: CharacterModelMapper,
        messages: E,
    ) -> Self {
        Self {
            planets,
            species,
            films,
            characters,
            messages,
        }
    }

    /// Fold one sub-fetch outcome into its slice.
    fn fold_slice<T, M>(
        &self,
        outcome: FetchOutcome<T>,
        map: impl FnOnce(&T) -> M,
    ) -> SliceState<M> {
        match outcome {
            FetchOutcome::Loading => SliceState::Loading,
            FetchOutcome::Success(payload) => SliceState::Success(map(&payload)),
            FetchOutcome::Error(error) => SliceState::Error(self.messages.message(&error)),
        }
    }
}

impl<E: ErrorMessageMapper> Reducer for DetailViewStateReducer<E> {
    type State = DetailViewState;
    type Result = DetailViewResult;

    fn reduce(&self, state: Self::State, result: Self::Result) -> Self::State {
        match result {
            DetailViewResult::CharacterDetail(character) => DetailViewState {
                // A successful fetch also ends any retry/error episode.
                session: DetailSessionState::Idle,
                profile: SliceState::Success(self.characters.map(&character)),
                ..state
            },

            DetailViewResult::Retrying => DetailViewState {
                // Root-only marker: slices keep whatever they had.
                session: DetailSessionState::Retrying,
                ..state
            },

            DetailViewResult::FetchCharacterDetailError { name, error } => DetailViewState {
                session: DetailSessionState::FetchError {
                    name,
                    message: self.messages.message(&error),
                },
                ..state
            },

            DetailViewResult::Planet(outcome) => {
                let planet = self.fold_slice(outcome, |planet| self.planets.map(planet));
                DetailViewState { planet, ..state }
            }

            DetailViewResult::Films(outcome) => {
                let films = self.fold_slice(outcome, |list| self.films.map_list(list));
                DetailViewState { films, ..state }
            }

            DetailViewResult::Species(outcome) => {
                let species = self.fold_slice(outcome, |list| self.species.map_list(list));
                DetailViewState { species, ..state }
            }
        }
    }
}
