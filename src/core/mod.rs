//! Core state-machine vocabulary.
//!
//! This module holds the pure pieces the dialogue engine is built from:
//! - State definitions via the `State` trait
//! - Guard predicates for branch checks
//! - Immutable history of conversation turns
//!
//! Nothing here performs I/O.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;
