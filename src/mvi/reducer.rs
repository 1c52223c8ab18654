//! Reducer trait for the unidirectional flow.

use super::result::ViewResult;
use super::state::ViewState;

/// A reducer folds one result event into the current view state.
///
/// The reducer is the only place where state transitions happen. It must
/// be a pure, total function over `(State, Result)`: deterministic, no
/// side effects, no error channel, and an exhaustive match over the
/// result enum so unhandled variants fail to compile. Collaborators
/// (model mappers, the error formatter) arrive through the concrete
/// reducer's constructor, never through globals.
pub trait Reducer {
    /// The state tree this reducer produces.
    type State: ViewState;

    /// The result events this reducer consumes.
    type Result: ViewResult;

    /// Fold one result into the current state and return the new state.
    ///
    /// Branches of the returned tree that the result does not touch are
    /// value-equal to the input's corresponding branches.
    fn reduce(&self, state: Self::State, result: Self::Result) -> Self::State;
}
