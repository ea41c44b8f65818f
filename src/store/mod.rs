//! Unidirectional state container.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Listeners ──→ View
//!    ↑                                            │
//!    └────────────────────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of everything the view needs
//! - **Intent**: a request to change state (key press, command)
//! - **Reducer**: pure function `(State, Intent) -> State`
//! - **Store**: owns the state, runs the reducer, notifies listeners
//!
//! The store is constructed explicitly and passed by reference; there is
//! no global instance.

mod container;
mod reducer;

pub use container::{Store, SubscriptionId};
pub use reducer::Reducer;
