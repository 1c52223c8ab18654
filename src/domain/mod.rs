//! Domain layer: entities and the failure taxonomy shared with the
//! external fetch collaborators.

mod entity;
mod error;

pub use entity::{Character, CharacterDetail, Film, Planet, Specie};
pub use error::FetchError;
