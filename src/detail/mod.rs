//! Character-detail screen feature module.
//!
//! Folds the character fetch and its three per-field sub-fetches
//! (planet, films, species) into one state tree.
//!
//! # Architecture
//!
//! - `state.rs` - the immutable tree: root session marker + four slices
//! - `result.rs` - result events from the detail and sub-fetch services
//! - `reducer.rs` - state transitions (pure, collaborators injected)

mod reducer;
mod result;
mod state;

pub use reducer::DetailViewStateReducer;
pub use result::{DetailViewResult, FilmDetailResult, PlanetDetailResult, SpecieDetailResult};
pub use state::{DetailSessionState, DetailViewState};
