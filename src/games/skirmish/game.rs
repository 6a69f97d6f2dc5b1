//! Skirmish: the reference rules engine.
//!
//! Deliberately small rules, enough to validate recorded games end to end:
//! units move to empty squares, attacks remove the defender, castle
//! attacks flip ownership, recruitment requires an owned castle, pledges
//! claim unclaimed special zones. Movement range and combat odds are not
//! modeled; the production rules crate supplies those.

use crate::core::{
    AbilityCode, BoardState, Castle, Color, Coord, PhaseId, Piece, PledgeCode, UnitCode,
};
use crate::rules::{RulesEngine, RulesError};
use crate::setup::{BoardShape, Setup};

/// Plies of the opening muster phase.
const MUSTER_PLIES: u32 = 6;

/// Phase labels the skirmish engine reports.
pub const MUSTER: PhaseId = PhaseId::new(0);
pub const BATTLE: PhaseId = PhaseId::new(1);

/// The reference rules engine.
#[derive(Clone, Debug)]
pub struct SkirmishRules {
    board: BoardShape,
}

impl SkirmishRules {
    /// Create an engine for the given board shape.
    #[must_use]
    pub const fn new(board: BoardShape) -> Self {
        Self { board }
    }

    /// Create an engine matching a setup's board.
    #[must_use]
    pub const fn for_setup(setup: &Setup) -> Self {
        Self::new(setup.board)
    }

    /// The index of the mover's piece on `at`, or a descriptive rejection.
    fn own_piece(&self, state: &BoardState, at: Coord) -> Result<usize, RulesError> {
        let idx = state.piece_index(at).ok_or(RulesError::EmptySquare(at))?;
        let owner = state.pieces[idx].color;
        if owner != state.side_to_move() {
            return Err(RulesError::WrongOwner { at, owner });
        }
        Ok(idx)
    }

    fn check_on_board(&self, at: Coord) -> Result<(), RulesError> {
        if self.board.contains(at) {
            Ok(())
        } else {
            Err(RulesError::OffBoard(at))
        }
    }
}

impl RulesEngine for SkirmishRules {
    fn apply_move(
        &self,
        state: &BoardState,
        from: Coord,
        to: Coord,
    ) -> Result<BoardState, RulesError> {
        self.check_on_board(to)?;
        let idx = self.own_piece(state, from)?;
        if state.piece_at(to).is_some() {
            return Err(RulesError::Occupied(to));
        }
        if let Some(castle) = state.castle_at(to) {
            if castle.owner != state.side_to_move() {
                return Err(RulesError::Occupied(to));
            }
        }
        let mut next = state.clone();
        if let Some(piece) = next.pieces.get_mut(idx) {
            piece.at = to;
        }
        next.advance_ply();
        Ok(next)
    }

    fn apply_attack(
        &self,
        state: &BoardState,
        from: Coord,
        to: Coord,
    ) -> Result<BoardState, RulesError> {
        self.check_on_board(to)?;
        self.own_piece(state, from)?;
        let target = state.piece_index(to).ok_or(RulesError::NoTarget(to))?;
        if state.pieces[target].color == state.side_to_move() {
            return Err(RulesError::WrongOwner {
                at: to,
                owner: state.pieces[target].color,
            });
        }
        let mut next = state.clone();
        next.pieces.remove(target);
        // The attacker advances onto the vacated square.
        if let Some(idx) = next.piece_index(from) {
            if let Some(piece) = next.pieces.get_mut(idx) {
                piece.at = to;
            }
        }
        next.advance_ply();
        Ok(next)
    }

    fn apply_castle_attack(
        &self,
        state: &BoardState,
        from: Coord,
        to: Coord,
    ) -> Result<BoardState, RulesError> {
        self.check_on_board(to)?;
        self.own_piece(state, from)?;
        let idx = state.castle_index(to).ok_or(RulesError::NoTarget(to))?;
        let mover = state.side_to_move();
        if state.castles[idx].owner == mover {
            return Err(RulesError::FriendlyCastle(to));
        }
        let mut next = state.clone();
        if let Some(castle) = next.castles.get_mut(idx) {
            castle.owner = mover;
        }
        next.advance_ply();
        Ok(next)
    }

    fn recruit_piece(
        &self,
        state: &BoardState,
        at: Coord,
        unit: UnitCode,
    ) -> Result<BoardState, RulesError> {
        self.check_on_board(at)?;
        if state.piece_at(at).is_some() {
            return Err(RulesError::Occupied(at));
        }
        let mover = state.side_to_move();
        if !state.castles.iter().any(|c| c.owner == mover) {
            return Err(RulesError::Illegal {
                reason: format!("{mover} holds no castle to recruit from"),
            });
        }
        let mut next = state.clone();
        next.pieces.push_back(Piece::new(mover, unit, at));
        next.advance_ply();
        Ok(next)
    }

    fn pledge(
        &self,
        state: &BoardState,
        pledge: PledgeCode,
        at: Coord,
    ) -> Result<BoardState, RulesError> {
        let idx = state.zone_index(at).ok_or(RulesError::NoZone(at))?;
        if state.zones[idx].pledge.is_some() {
            return Err(RulesError::AlreadyPledged(at));
        }
        let mut next = state.clone();
        if let Some(zone) = next.zones.get_mut(idx) {
            zone.pledge = Some((state.side_to_move(), pledge));
        }
        next.advance_ply();
        Ok(next)
    }

    fn activate_ability(
        &self,
        state: &BoardState,
        _ability: AbilityCode,
        at: Coord,
    ) -> Result<BoardState, RulesError> {
        self.own_piece(state, at)?;
        let mut next = state.clone();
        next.advance_ply();
        Ok(next)
    }

    fn pass_turn(&self, state: &BoardState) -> Result<BoardState, RulesError> {
        let mut next = state.clone();
        next.advance_ply();
        Ok(next)
    }

    fn current_player(&self, ply: u32) -> Color {
        Color::for_ply(ply)
    }

    fn turn_phase(&self, ply: u32) -> PhaseId {
        if ply <= MUSTER_PLIES {
            MUSTER
        } else {
            BATTLE
        }
    }
}

/// Builder for skirmish setups.
pub struct SkirmishSetupBuilder {
    board: BoardShape,
    castles: Vec<Castle>,
    pieces: Vec<Piece>,
    zones: Vec<Coord>,
}

impl Default for SkirmishSetupBuilder {
    fn default() -> Self {
        Self {
            board: BoardShape::new(14, 14),
            castles: Vec::new(),
            pieces: Vec::new(),
            zones: Vec::new(),
        }
    }
}

impl SkirmishSetupBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn board(mut self, cols: u8, rows: u8) -> Self {
        self.board = BoardShape::new(cols, rows);
        self
    }

    #[must_use]
    pub fn castle(mut self, at: Coord, owner: Color) -> Self {
        self.castles.push(Castle::new(at, owner));
        self
    }

    #[must_use]
    pub fn piece(mut self, color: Color, unit: UnitCode, at: Coord) -> Self {
        self.pieces.push(Piece::new(color, unit, at));
        self
    }

    #[must_use]
    pub fn zone(mut self, at: Coord) -> Self {
        self.zones.push(at);
        self
    }

    /// Build the setup. An empty zone list stays absent.
    #[must_use]
    pub fn build(self) -> Setup {
        Setup {
            board: self.board,
            castles: self.castles,
            pieces: self.pieces,
            zones: if self.zones.is_empty() {
                None
            } else {
                Some(self.zones)
            },
            rules: None,
        }
    }
}

/// The standard two-castle opening position.
#[must_use]
pub fn standard_setup() -> Setup {
    SkirmishSetupBuilder::new()
        .castle(Coord::new(2, 3), Color::White)
        .castle(Coord::new(11, 12), Color::Black)
        .piece(Color::White, UnitCode::Soldier, Coord::new(2, 4))
        .piece(Color::White, UnitCode::Archer, Coord::new(3, 3))
        .piece(Color::Black, UnitCode::Soldier, Coord::new(11, 11))
        .piece(Color::Black, UnitCode::Archer, Coord::new(10, 12))
        .build()
}
