//! Rules engine trait for game implementations.
//!
//! The history subsystem never interprets movement geometry, combat, or
//! pledge eligibility itself: hydration decodes notation into operands and
//! calls these methods on the externally supplied engine.
//!
//! ## Implementation Notes
//!
//! - Every operation is a pure function from `(state, operands)` to a new
//!   state: implementations must not mutate the input.
//! - Operations must be total over well-formed input — an illegal move
//!   returns a descriptive [`RulesError`], it never panics. Hydration
//!   catches failures at branch granularity.
//! - Successor states own turn semantics: an accepted operation advances
//!   the state's ply counter.

use thiserror::Error;

use crate::core::{AbilityCode, BoardState, Color, Coord, PhaseId, PledgeCode, UnitCode};

/// Descriptive rejection of an illegal operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("no piece on {0}")]
    EmptySquare(Coord),
    #[error("{0} is occupied")]
    Occupied(Coord),
    #[error("piece on {at} belongs to {owner}")]
    WrongOwner { at: Coord, owner: Color },
    #[error("nothing to attack on {0}")]
    NoTarget(Coord),
    #[error("castle on {0} is already friendly")]
    FriendlyCastle(Coord),
    #[error("no special zone on {0}")]
    NoZone(Coord),
    #[error("special zone on {0} is already pledged")]
    AlreadyPledged(Coord),
    #[error("{0} is off the board")]
    OffBoard(Coord),
    #[error("{reason}")]
    Illegal { reason: String },
}

/// The consumed rules-engine interface.
///
/// One method per move-token shape (attacks split by target kind), plus
/// the two pure queries hydration uses to attribute moves.
pub trait RulesEngine {
    /// Move a unit between squares.
    fn apply_move(&self, state: &BoardState, from: Coord, to: Coord)
        -> Result<BoardState, RulesError>;

    /// Attack the unit on `to`.
    fn apply_attack(&self, state: &BoardState, from: Coord, to: Coord)
        -> Result<BoardState, RulesError>;

    /// Attack the castle on `to`.
    fn apply_castle_attack(
        &self,
        state: &BoardState,
        from: Coord,
        to: Coord,
    ) -> Result<BoardState, RulesError>;

    /// Recruit a new unit onto `at`.
    fn recruit_piece(
        &self,
        state: &BoardState,
        at: Coord,
        unit: UnitCode,
    ) -> Result<BoardState, RulesError>;

    /// Pledge on the special zone at `at`.
    fn pledge(
        &self,
        state: &BoardState,
        pledge: PledgeCode,
        at: Coord,
    ) -> Result<BoardState, RulesError>;

    /// Invoke an ability on `at`.
    fn activate_ability(
        &self,
        state: &BoardState,
        ability: AbilityCode,
        at: Coord,
    ) -> Result<BoardState, RulesError>;

    /// Forfeit the turn.
    fn pass_turn(&self, state: &BoardState) -> Result<BoardState, RulesError>;

    // === Pure queries ===

    /// The color that moves on the given 1-based ply.
    fn current_player(&self, ply: u32) -> Color;

    /// The turn phase in effect on the given 1-based ply.
    fn turn_phase(&self, ply: u32) -> PhaseId;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_error_is_descriptive() {
        let err = RulesError::WrongOwner {
            at: Coord::new(9, 11),
            owner: Color::Black,
        };
        assert_eq!(err.to_string(), "piece on J11 belongs to Black");

        let err = RulesError::EmptySquare(Coord::new(0, 1));
        assert_eq!(err.to_string(), "no piece on A1");
    }
}
