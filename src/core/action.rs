//! Decoded game actions and the move-token decoder.
//!
//! A move token is one of six shapes:
//!
//! | Shape                | Example    | Action |
//! |----------------------|------------|--------|
//! | `<coord><coord>`     | `J11J10`   | plain move |
//! | `<coord>x<coord>`    | `N11xM11`  | attack |
//! | `<coord>=<code>`     | `C4=ARC`   | recruitment |
//! | `P:<code><coord>`    | `P:GRDE7`  | pledge |
//! | `A:<code><coord>`    | `A:RLYJ3`  | ability invocation |
//! | `Pass`               | `Pass`     | pass |
//!
//! The decoder is used only by hydration: the parser stores whatever token
//! it sees, and a token that fails to decode truncates its branch there.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::coord::{Coord, CoordError};
use super::piece::{AbilityCode, PledgeCode, UnitCode};

/// Error produced when a notation token fails to decode into an action.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("unrecognized move token '{0}'")]
    Unrecognized(String),
    #[error("bad coordinate in '{token}': {source}")]
    Coord {
        token: String,
        #[source]
        source: CoordError,
    },
    #[error("unknown unit code '{0}'")]
    UnknownUnit(String),
    #[error("unknown pledge code '{0}'")]
    UnknownPledge(String),
    #[error("unknown ability code '{0}'")]
    UnknownAbility(String),
}

/// A fully decoded move, ready to hand to the rules engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    /// Move a unit between two squares.
    Move { from: Coord, to: Coord },
    /// Attack the unit (or castle) on the target square.
    Attack { from: Coord, to: Coord },
    /// Recruit a new unit onto a square.
    Recruit { at: Coord, unit: UnitCode },
    /// Pledge on a special zone.
    Pledge { pledge: PledgeCode, at: Coord },
    /// Invoke an ability on a square.
    Ability { ability: AbilityCode, at: Coord },
    /// Forfeit the turn.
    Pass,
}

impl GameAction {
    /// Decode a notation token.
    pub fn decode(token: &str) -> Result<Self, DecodeError> {
        if token == "Pass" {
            return Ok(GameAction::Pass);
        }
        if let Some(rest) = token.strip_prefix("P:") {
            let (code, at) = split_code_coord(token, rest)?;
            let pledge =
                PledgeCode::from_code(code).ok_or_else(|| DecodeError::UnknownPledge(code.to_string()))?;
            return Ok(GameAction::Pledge { pledge, at });
        }
        if let Some(rest) = token.strip_prefix("A:") {
            let (code, at) = split_code_coord(token, rest)?;
            let ability =
                AbilityCode::from_code(code).ok_or_else(|| DecodeError::UnknownAbility(code.to_string()))?;
            return Ok(GameAction::Ability { ability, at });
        }

        // Coordinate-led shapes: move, attack, recruitment.
        let (from, consumed) = Coord::parse_prefix(token).map_err(|source| DecodeError::Coord {
            token: token.to_string(),
            source,
        })?;
        let rest = &token[consumed..];
        if let Some(target) = rest.strip_prefix('x') {
            let to = parse_full_coord(token, target)?;
            return Ok(GameAction::Attack { from, to });
        }
        if let Some(code) = rest.strip_prefix('=') {
            let unit =
                UnitCode::from_code(code).ok_or_else(|| DecodeError::UnknownUnit(code.to_string()))?;
            return Ok(GameAction::Recruit { at: from, unit });
        }
        if rest.is_empty() {
            return Err(DecodeError::Unrecognized(token.to_string()));
        }
        let to = parse_full_coord(token, rest)?;
        Ok(GameAction::Move { from, to })
    }

    /// Canonical notation for this action, the inverse of [`decode`].
    ///
    /// [`decode`]: GameAction::decode
    #[must_use]
    pub fn notation(&self) -> String {
        match self {
            GameAction::Move { from, to } => format!("{from}{to}"),
            GameAction::Attack { from, to } => format!("{from}x{to}"),
            GameAction::Recruit { at, unit } => format!("{at}={unit}"),
            GameAction::Pledge { pledge, at } => format!("P:{pledge}{at}"),
            GameAction::Ability { ability, at } => format!("A:{ability}{at}"),
            GameAction::Pass => "Pass".to_string(),
        }
    }
}

/// Split a `<code><coord>` tail into its 3-letter code and coordinate.
fn split_code_coord<'a>(token: &str, rest: &'a str) -> Result<(&'a str, Coord), DecodeError> {
    let code = rest
        .get(..3)
        .ok_or_else(|| DecodeError::Unrecognized(token.to_string()))?;
    let at = parse_full_coord(token, &rest[3..])?;
    Ok((code, at))
}

fn parse_full_coord(token: &str, text: &str) -> Result<Coord, DecodeError> {
    text.parse().map_err(|source| DecodeError::Coord {
        token: token.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_plain_move() {
        assert_eq!(
            GameAction::decode("J11J10").unwrap(),
            GameAction::Move {
                from: Coord::new(9, 11),
                to: Coord::new(9, 10),
            }
        );
    }

    #[test]
    fn test_decode_attack() {
        assert_eq!(
            GameAction::decode("N11xM11").unwrap(),
            GameAction::Attack {
                from: Coord::new(13, 11),
                to: Coord::new(12, 11),
            }
        );
    }

    #[test]
    fn test_decode_recruit() {
        assert_eq!(
            GameAction::decode("C4=ARC").unwrap(),
            GameAction::Recruit {
                at: Coord::new(2, 4),
                unit: UnitCode::Archer,
            }
        );
    }

    #[test]
    fn test_decode_pledge() {
        assert_eq!(
            GameAction::decode("P:GRDE7").unwrap(),
            GameAction::Pledge {
                pledge: PledgeCode::Guard,
                at: Coord::new(4, 7),
            }
        );
    }

    #[test]
    fn test_decode_ability() {
        assert_eq!(
            GameAction::decode("A:RLYJ3").unwrap(),
            GameAction::Ability {
                ability: AbilityCode::Rally,
                at: Coord::new(9, 3),
            }
        );
    }

    #[test]
    fn test_decode_pass() {
        assert_eq!(GameAction::decode("Pass").unwrap(), GameAction::Pass);
        // Case-sensitive literal.
        assert!(GameAction::decode("pass").is_err());
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            GameAction::decode("d4"),
            Err(DecodeError::Unrecognized(_))
        ));
        assert!(matches!(
            GameAction::decode("C4=XYZ"),
            Err(DecodeError::UnknownUnit(_))
        ));
        assert!(matches!(
            GameAction::decode("P:SOLE7"),
            Err(DecodeError::UnknownPledge(_))
        ));
        assert!(matches!(
            GameAction::decode("A:ZZZB2"),
            Err(DecodeError::UnknownAbility(_))
        ));
        assert!(matches!(GameAction::decode("J11x"), Err(DecodeError::Coord { .. })));
        assert!(GameAction::decode("!!").is_err());
    }

    #[test]
    fn test_notation_round_trip() {
        for token in ["J11J10", "N11xM11", "C4=CAV", "P:CHME7", "A:VLYB2", "Pass"] {
            let action = GameAction::decode(token).unwrap();
            assert_eq!(action.notation(), token);
        }
    }
}
