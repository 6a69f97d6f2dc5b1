//! Board state snapshots.
//!
//! A [`BoardState`] is the rules-engine-validated position at one node of
//! the history tree: piece list, castle list, special-zone list, the turn
//! counter, and the notation history up to that point.
//!
//! Snapshots are attached to every hydrated node, so they use `im` persistent
//! collections: cloning a state shares structure with its parent instead of
//! copying the lists.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::color::Color;
use super::coord::Coord;
use super::piece::{Castle, Piece, SpecialZone};

/// Turn-phase identifier. The rules engine defines what phases exist;
/// this crate treats them as opaque labels on move records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhaseId(pub u16);

impl PhaseId {
    /// Create a new phase ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for PhaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Phase({})", self.0)
    }
}

/// A validated position snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardState {
    /// Units on the board.
    pub pieces: Vector<Piece>,

    /// Castle squares and their current owners.
    pub castles: Vector<Castle>,

    /// Special zones and their pledge status.
    pub zones: Vector<SpecialZone>,

    /// Turn counter: the 1-based ply of the next move to be played.
    pub ply: u32,

    /// Notation of every move that produced this state, in order.
    pub history: Vector<String>,
}

impl BoardState {
    /// An empty position with the turn counter at the first ply.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            pieces: Vector::new(),
            castles: Vector::new(),
            zones: Vector::new(),
            ply: 1,
            history: Vector::new(),
        }
    }

    /// The color to move in this state.
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        Color::for_ply(self.ply)
    }

    // === Lookups ===

    /// Index of the piece on `at`, if any.
    #[must_use]
    pub fn piece_index(&self, at: Coord) -> Option<usize> {
        self.pieces.iter().position(|p| p.at == at)
    }

    /// The piece on `at`, if any.
    #[must_use]
    pub fn piece_at(&self, at: Coord) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.at == at)
    }

    /// Index of the castle on `at`, if any.
    #[must_use]
    pub fn castle_index(&self, at: Coord) -> Option<usize> {
        self.castles.iter().position(|c| c.at == at)
    }

    /// The castle on `at`, if any.
    #[must_use]
    pub fn castle_at(&self, at: Coord) -> Option<&Castle> {
        self.castles.iter().find(|c| c.at == at)
    }

    /// Index of the special zone on `at`, if any.
    #[must_use]
    pub fn zone_index(&self, at: Coord) -> Option<usize> {
        self.zones.iter().position(|z| z.at == at)
    }

    /// The special zone on `at`, if any.
    #[must_use]
    pub fn zone_at(&self, at: Coord) -> Option<&SpecialZone> {
        self.zones.iter().find(|z| z.at == at)
    }

    // === Mutation (used by rules engines building successor states) ===

    /// Advance the turn counter by one ply.
    pub fn advance_ply(&mut self) {
        self.ply += 1;
    }

    /// Append a move's notation to the history.
    pub fn record_notation(&mut self, notation: impl Into<String>) {
        self.history.push_back(notation.into());
    }
}
