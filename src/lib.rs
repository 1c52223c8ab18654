//! Unidirectional view-state core for a character-search application.
//!
//! Typed results from asynchronous fetches are folded by pure reducers
//! into immutable view-state trees. Subscribers observe independent
//! slices of a tree and are woken only when their slice changes.
//!
//! # Architecture
//!
//! ```text
//! fetch collaborators ──ViewResult──→ ScreenSession ──→ Reducer ──→ ViewState
//!                                     (one at a time)                   │
//!                                                                       ▼
//!                                                             slice subscribers
//! ```
//!
//! The crate carries no UI, navigation, or network code: hosts plug in
//! collaborators that produce results and render slices.

pub mod detail;
pub mod domain;
pub mod mapper;
pub mod model;
pub mod mvi;
pub mod scenario;
pub mod search;
pub mod store;
