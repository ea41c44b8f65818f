//! Reducer contract for the state container.

/// Transforms state in response to intents.
///
/// A reducer is the only place where state transitions happen. It must be
/// a pure function: the next state depends on the current state and the
/// intent alone, with no side effects, so every transition is testable as
/// an input/output pair.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: Clone + PartialEq + Default;

    /// The intent type this reducer handles.
    type Intent;

    /// Compute the next state. Unhandled intents return the state unchanged.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
