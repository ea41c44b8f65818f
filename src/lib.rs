//! tally — a terminal counter built on a unidirectional state container.
//!
//! The [`store`] module holds the generic container (reducer, dispatch,
//! listener registry); [`counter`] instantiates it with the counter
//! domain; [`ui`] renders it with ratatui.

pub mod config;
pub mod counter;
pub mod logging;
pub mod shutdown;
pub mod store;
pub mod ui;
