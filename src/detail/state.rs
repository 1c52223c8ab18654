//! State tree for the character-detail screen.

use crate::model::{CharacterModel, FilmModel, PlanetModel, SpecieModel};
use crate::mvi::{SliceState, ViewState};

/// Root marker for the detail session.
///
/// Tracks whole-screen outcomes distinct from any one slice: the full
/// detail fetch being retried, or failing before anything could load.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailSessionState {
    /// Normal operation; slices carry their own progress.
    #[default]
    Idle,
    /// The whole detail fetch is being retried.
    Retrying,
    /// The character fetch itself failed.
    FetchError { name: String, message: String },
}

/// Immutable state tree for the character-detail screen.
///
/// Every field is an independently observable slice. Reductions copy
/// the untouched branches through struct update, so a result aimed at
/// one slice leaves every other branch value-equal.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailViewState {
    pub session: DetailSessionState,
    pub profile: SliceState<CharacterModel>,
    pub planet: SliceState<PlanetModel>,
    pub films: SliceState<Vec<FilmModel>>,
    pub species: SliceState<Vec<SpecieModel>>,
}

impl ViewState for DetailViewState {}

impl DetailViewState {
    /// True while the whole session is flagged as retrying.
    pub fn is_retrying(&self) -> bool {
        matches!(self.session, DetailSessionState::Retrying)
    }

    /// Name and display message of a whole-fetch failure, if one happened.
    pub fn fetch_error(&self) -> Option<(&str, &str)> {
        match &self.session {
            DetailSessionState::FetchError { name, message } => {
                Some((name.as_str(), message.as_str()))
            }
            _ => None,
        }
    }
}
