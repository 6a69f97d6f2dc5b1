//! Board coordinates.
//!
//! A coordinate is one file letter followed by a 1-based rank number, e.g.
//! `J11`. Files run `A`..`Z`, so boards up to 26 files wide are addressable;
//! ranks are limited only by the board shape in the [`Setup`].
//!
//! [`Setup`]: crate::setup::Setup

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error produced when a coordinate fails to parse.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CoordError {
    #[error("empty coordinate")]
    Empty,
    #[error("'{0}' is not a file letter")]
    BadFile(char),
    #[error("missing rank digits in '{0}'")]
    MissingRank(String),
    #[error("rank out of range in '{0}'")]
    RankRange(String),
    #[error("trailing characters in '{0}'")]
    Trailing(String),
}

/// A single board square.
///
/// Stored as a 0-based file index and a 1-based rank, matching the notation
/// (`A1` is file 0, rank 1). Serializes as its notation string so setups
/// stay legible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    /// File index, 0-based (`A` = 0).
    pub file: u8,
    /// Rank, 1-based.
    pub rank: u16,
}

impl Coord {
    /// Create a coordinate from a 0-based file index and 1-based rank.
    #[must_use]
    pub const fn new(file: u8, rank: u16) -> Self {
        Self { file, rank }
    }

    /// Parse a coordinate prefix from `input`.
    ///
    /// Returns the coordinate and the number of bytes consumed. This is the
    /// building block for move tokens, which glue two coordinates together
    /// (`J11J10`).
    pub fn parse_prefix(input: &str) -> Result<(Self, usize), CoordError> {
        let letter = input.chars().next().ok_or(CoordError::Empty)?;
        if !letter.is_ascii_alphabetic() {
            return Err(CoordError::BadFile(letter));
        }
        let file = letter.to_ascii_uppercase() as u8 - b'A';

        let digits_start = letter.len_utf8();
        let digits_end = input[digits_start..]
            .find(|c: char| !c.is_ascii_digit())
            .map_or(input.len(), |i| digits_start + i);
        if digits_end == digits_start {
            return Err(CoordError::MissingRank(input.to_string()));
        }
        let rank: u16 = input[digits_start..digits_end]
            .parse()
            .map_err(|_| CoordError::RankRange(input.to_string()))?;
        if rank == 0 {
            return Err(CoordError::RankRange(input.to_string()));
        }
        Ok((Self { file, rank }, digits_end))
    }
}

impl std::str::FromStr for Coord {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (coord, consumed) = Coord::parse_prefix(s)?;
        if consumed != s.len() {
            return Err(CoordError::Trailing(s.to_string()));
        }
        Ok(coord)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'A' + self.file) as char, self.rank)
    }
}

impl Serialize for Coord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Coord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
