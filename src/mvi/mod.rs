//! Unidirectional data-flow primitives.
//!
//! This module provides the base traits and generic building blocks for
//! folding fetch results into immutable view state.
//!
//! # Architecture
//!
//! ```text
//! ViewResult ──→ Reducer ──→ ViewState ──→ subscribers
//!     ↑                                        │
//!     └── external fetch collaborators ←───────┘
//! ```
//!
//! - **ViewState**: immutable tree of independently observable slices
//! - **ViewResult**: classified outcome of an asynchronous fetch
//! - **Reducer**: pure function that transforms state based on results

mod reducer;
mod result;
mod state;

pub use reducer::Reducer;
pub use result::{FetchOutcome, ViewResult};
pub use state::{SliceState, ViewState};
