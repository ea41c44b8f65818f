use crate::counter::intent::CounterIntent;
use crate::counter::state::CounterState;
use crate::store::Reducer;

/// The four counter transitions.
///
/// Increment and decrement saturate at the `i64` bounds instead of
/// wrapping or panicking; a counter pinned at the boundary is still a
/// well-formed state.
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::Increment => CounterState::new(state.value.saturating_add(1)),
            CounterIntent::Decrement => CounterState::new(state.value.saturating_sub(1)),
            CounterIntent::Reset => CounterState::new(0),
            CounterIntent::Set(value) => CounterState::new(value),
        }
    }
}
