//! Player colors.
//!
//! Stronghold is a strictly two-player game; every move, piece, castle, and
//! pledge belongs to one of the two colors. White moves on odd plies, Black
//! on even plies.

use serde::{Deserialize, Serialize};

/// One of the two sides in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The opposing color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// The color that moves on the given ply (1-based).
    ///
    /// Odd plies are White's, even plies are Black's.
    #[must_use]
    pub const fn for_ply(ply: u32) -> Self {
        if ply % 2 == 1 {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Stable 0/1 index, used by the compact setup encoding.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Inverse of [`Color::index`].
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Color::White),
            1 => Some(Color::Black),
            _ => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}
