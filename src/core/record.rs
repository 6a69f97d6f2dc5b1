//! Move records.
//!
//! A move record is the immutable value stored at each tree node: the
//! notation string, the ply number, and — once hydration has replayed the
//! move — the mover's color and the turn phase.
//!
//! The parser cannot know color or phase (both depend on replaying the
//! position), so the unresolved state is a distinct variant rather than
//! placeholder field values: only hydration converts `Raw` into `Resolved`.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::state::PhaseId;

/// One recorded move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveRecord {
    /// As parsed from text: notation and ply only.
    Raw { notation: String, ply: u32 },
    /// After hydration: attributed to a mover and a turn phase.
    Resolved {
        notation: String,
        ply: u32,
        color: Color,
        phase: PhaseId,
    },
}

impl MoveRecord {
    /// A raw record, as the parser produces.
    #[must_use]
    pub fn raw(notation: impl Into<String>, ply: u32) -> Self {
        MoveRecord::Raw {
            notation: notation.into(),
            ply,
        }
    }

    /// The sentinel record carried by a tree's root node.
    #[must_use]
    pub fn sentinel() -> Self {
        MoveRecord::Raw {
            notation: String::new(),
            ply: 0,
        }
    }

    /// The notation string.
    #[must_use]
    pub fn notation(&self) -> &str {
        match self {
            MoveRecord::Raw { notation, .. } | MoveRecord::Resolved { notation, .. } => notation,
        }
    }

    /// The 1-based ply number (0 for the root sentinel).
    #[must_use]
    pub fn ply(&self) -> u32 {
        match self {
            MoveRecord::Raw { ply, .. } | MoveRecord::Resolved { ply, .. } => *ply,
        }
    }

    /// The mover's color, if hydration has resolved it.
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        match self {
            MoveRecord::Raw { .. } => None,
            MoveRecord::Resolved { color, .. } => Some(*color),
        }
    }

    /// The turn phase, if hydration has resolved it.
    #[must_use]
    pub fn phase(&self) -> Option<PhaseId> {
        match self {
            MoveRecord::Raw { .. } => None,
            MoveRecord::Resolved { phase, .. } => Some(*phase),
        }
    }

    /// Whether this record has been attributed by hydration.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, MoveRecord::Resolved { .. })
    }

    /// Attribute this record to a mover and phase. Notation and ply are
    /// preserved; resolving an already-resolved record overwrites the
    /// attribution.
    #[must_use]
    pub fn resolve(&self, color: Color, phase: PhaseId) -> Self {
        MoveRecord::Resolved {
            notation: self.notation().to_string(),
            ply: self.ply(),
            color,
            phase,
        }
    }
}
