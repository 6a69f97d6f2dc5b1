//! Core notation types: colors, coordinates, codes, actions, records, states.
//!
//! This module contains the fundamental building blocks shared by the tree,
//! the notation layer, and the hydration engine. The rules engine assigns
//! gameplay meaning; these types only represent it.

pub mod action;
pub mod color;
pub mod coord;
pub mod piece;
pub mod record;
pub mod state;

pub use action::{DecodeError, GameAction};
pub use color::Color;
pub use coord::{Coord, CoordError};
pub use piece::{AbilityCode, Castle, Piece, PledgeCode, SpecialZone, UnitCode};
pub use record::MoveRecord;
pub use state::{BoardState, PhaseId};
