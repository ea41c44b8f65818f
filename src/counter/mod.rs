//! The counter domain: state, intents, reducer, and the set-value
//! input boundary.

mod intent;
mod parse;
mod reducer;
mod state;

pub use intent::CounterIntent;
pub use parse::{parse_set_value, SetValueError};
pub use reducer::CounterReducer;
pub use state::CounterState;
