//! Result events for the character-detail screen.

use crate::domain::{Character, FetchError, Film, Planet, Specie};
use crate::mvi::{FetchOutcome, ViewResult};

/// Outcome of the planet sub-fetch.
pub type PlanetDetailResult = FetchOutcome<Planet>;

/// Outcome of the films sub-fetch.
pub type FilmDetailResult = FetchOutcome<Vec<Film>>;

/// Outcome of the species sub-fetch.
pub type SpecieDetailResult = FetchOutcome<Vec<Specie>>;

/// Result events folded into the detail state tree.
///
/// The character fetch and the three sub-fetches are produced by
/// independent collaborators and may arrive in any interleaving; each
/// variant family owns exactly one branch of the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailViewResult {
    /// The character fetch succeeded.
    CharacterDetail(Character),
    /// The whole detail fetch is being retried.
    Retrying,
    /// The character fetch failed.
    FetchCharacterDetailError { name: String, error: FetchError },
    /// Planet sub-fetch progress.
    Planet(PlanetDetailResult),
    /// Films sub-fetch progress.
    Films(FilmDetailResult),
    /// Species sub-fetch progress.
    Species(SpecieDetailResult),
}

impl ViewResult for DetailViewResult {}
