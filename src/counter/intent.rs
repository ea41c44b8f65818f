/// Requests to change the counter.
///
/// Intents carry at most one payload field and are processed by
/// [`CounterReducer`](super::CounterReducer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterIntent {
    /// Add one to the value.
    Increment,
    /// Subtract one from the value.
    Decrement,
    /// Return the value to zero.
    Reset,
    /// Replace the value with the payload.
    Set(i64),
}
