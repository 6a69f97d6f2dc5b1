//! Skirmish: a minimal Stronghold rules engine for testing replay.
//!
//! Implements every [`RulesEngine`](crate::rules::RulesEngine) operation
//! with simplified legality (no movement range, no combat odds) so that
//! recorded games can be hydrated end to end without the production rules
//! crate.

mod game;

pub use game::{standard_setup, SkirmishRules, SkirmishSetupBuilder, BATTLE, MUSTER};
