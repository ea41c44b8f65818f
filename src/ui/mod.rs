//! Terminal view layer.
//!
//! The view subscribes to the store, renders the counter, and turns key
//! presses into dispatched intents. All state transitions go through
//! the store; the only view-local state is the uncommitted text of the
//! set-value field.

mod app;
mod events;
mod footer;
mod header;
mod input;
mod layout;
mod render;
mod runtime;
mod terminal_guard;
mod theme;

pub use app::{App, Focus};
pub use input::handle_key;
pub use runtime::run;
