//! Rules engine interface.
//!
//! The history subsystem consumes a [`RulesEngine`] to validate moves
//! during hydration; it never implements game rules itself. A reference
//! implementation lives in [`crate::games::skirmish`].

pub mod engine;

pub use engine::{RulesEngine, RulesError};
