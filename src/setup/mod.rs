//! Game setups: the serializable description of a starting position.
//!
//! A [`Setup`] is the legible form: board shape, castles, pieces, and the
//! optional special-zone list and rule settings. The [`codec`] module maps
//! it onto a compact array encoding for embedding in a text header.

pub mod codec;

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{BoardState, Castle, Coord, Piece, SpecialZone};

pub use codec::{decode_setup, encode_setup, CompactSetup, SetupError};

/// Board dimensions. Files run `A..` up to `cols`, ranks `1..=rows`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardShape {
    pub cols: u8,
    pub rows: u8,
}

impl BoardShape {
    #[must_use]
    pub const fn new(cols: u8, rows: u8) -> Self {
        Self { cols, rows }
    }

    /// Whether a coordinate lies on this board.
    #[must_use]
    pub fn contains(&self, at: Coord) -> bool {
        at.file < self.cols && at.rank >= 1 && at.rank <= self.rows as u16
    }
}

/// A starting position and its rule settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Setup {
    /// Board dimensions.
    pub board: BoardShape,

    /// Castle squares with their initial owners.
    pub castles: Vec<Castle>,

    /// Units on the board at game start.
    pub pieces: Vec<Piece>,

    /// Special-zone squares, if the board has any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zones: Option<Vec<Coord>>,

    /// Open-keyed rule settings, if any deviate from defaults.
    /// The rules engine defines the keys; this crate round-trips them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<FxHashMap<String, i64>>,
}

impl Setup {
    /// Create a setup with just a board shape.
    #[must_use]
    pub fn new(board: BoardShape) -> Self {
        Self {
            board,
            castles: Vec::new(),
            pieces: Vec::new(),
            zones: None,
            rules: None,
        }
    }

    /// The initial board state this setup describes: all pieces and castles
    /// placed, zones unclaimed, turn counter at ply 1.
    #[must_use]
    pub fn initial_state(&self) -> BoardState {
        BoardState {
            pieces: self.pieces.iter().copied().collect(),
            castles: self.castles.iter().copied().collect(),
            zones: self
                .zones
                .iter()
                .flatten()
                .map(|&at| SpecialZone::unclaimed(at))
                .collect::<Vector<_>>(),
            ply: 1,
            history: Vector::new(),
        }
    }
}
