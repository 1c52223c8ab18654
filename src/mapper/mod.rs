//! Mapping collaborators injected into reducers.
//!
//! Two seams live here: domain entity → presentation model, and
//! classified fetch failure → user-facing message. Reducers receive
//! both as constructor arguments and stay free of display wording.

mod errors;
mod models;

pub use errors::{DisplayErrorMessages, ErrorMessageMapper};
pub use models::{
    CharacterModelMapper, FilmModelMapper, ModelMapper, PlanetModelMapper, SpecieModelMapper,
};
