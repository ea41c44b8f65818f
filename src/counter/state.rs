/// The counter value shown by the UI.
///
/// `i64` by construction: non-numeric values are rejected at the input
/// boundary and cannot reach this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    pub value: i64,
}

impl CounterState {
    pub fn new(value: i64) -> Self {
        Self { value }
    }
}
