//! Search screen feature module.
//!
//! Folds live search results and the recent-search history into one
//! state tree. The two slices are independent: a failing search never
//! disturbs the history panel and vice versa.
//!
//! # Architecture
//!
//! - `state.rs` - the immutable tree: results + history slices
//! - `result.rs` - result events from the search and history services
//! - `reducer.rs` - state transitions (pure, collaborators injected)

mod reducer;
mod result;
mod state;

pub use reducer::SearchViewStateReducer;
pub use result::SearchViewResult;
pub use state::SearchViewState;
