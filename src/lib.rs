#![doc(test(attr(deny(warnings))))]

//! Budget Tracker keeps a session's tuition, subscription and food expenses in
//! memory and drives them through a text menu.

pub mod cli;
pub mod config;
pub mod errors;
pub mod expense;
pub mod utils;

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Initializes global tracing with the default filter.
pub fn init() {
    init_with_level(DEFAULT_LOG_LEVEL);
}

/// Initializes global tracing, using `level` when `RUST_LOG` is unset.
///
/// Only the first call in a process takes effect.
pub fn init_with_level(level: &str) {
    utils::init_tracing(level);
}
