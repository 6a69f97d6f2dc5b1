//! Pieces, castles, and special zones.
//!
//! Three fixed 3-letter code enumerations drive the notation:
//! - [`UnitCode`]: recruitable units (`<coord>=<code>`)
//! - [`PledgeCode`]: special-zone pledges (`P:<code><coord>`)
//! - [`AbilityCode`]: ability invocations (`A:<code><coord>`)
//!
//! The enumerations are disjoint; the rules engine assigns their gameplay
//! meaning, this crate only encodes and decodes them.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::coord::Coord;

/// Recruitable unit kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitCode {
    #[serde(rename = "SOL")]
    Soldier,
    #[serde(rename = "ARC")]
    Archer,
    #[serde(rename = "CAV")]
    Cavalry,
    #[serde(rename = "CAT")]
    Catapult,
}

impl UnitCode {
    /// All unit codes, in notation order.
    pub const ALL: [UnitCode; 4] = [
        UnitCode::Soldier,
        UnitCode::Archer,
        UnitCode::Cavalry,
        UnitCode::Catapult,
    ];

    /// The 3-letter notation code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            UnitCode::Soldier => "SOL",
            UnitCode::Archer => "ARC",
            UnitCode::Cavalry => "CAV",
            UnitCode::Catapult => "CAT",
        }
    }

    /// Look up a unit by its notation code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.code() == code)
    }
}

impl std::fmt::Display for UnitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Pledge kinds available on special zones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PledgeCode {
    #[serde(rename = "GRD")]
    Guard,
    #[serde(rename = "SCT")]
    Scout,
    #[serde(rename = "CHM")]
    Champion,
}

impl PledgeCode {
    /// All pledge codes, in notation order.
    pub const ALL: [PledgeCode; 3] = [PledgeCode::Guard, PledgeCode::Scout, PledgeCode::Champion];

    /// The 3-letter notation code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            PledgeCode::Guard => "GRD",
            PledgeCode::Scout => "SCT",
            PledgeCode::Champion => "CHM",
        }
    }

    /// Look up a pledge by its notation code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.code() == code)
    }
}

impl std::fmt::Display for PledgeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Invocable ability kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityCode {
    #[serde(rename = "RLY")]
    Rally,
    #[serde(rename = "VLY")]
    Volley,
    #[serde(rename = "FRT")]
    Fortify,
}

impl AbilityCode {
    /// All ability codes, in notation order.
    pub const ALL: [AbilityCode; 3] =
        [AbilityCode::Rally, AbilityCode::Volley, AbilityCode::Fortify];

    /// The 3-letter notation code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            AbilityCode::Rally => "RLY",
            AbilityCode::Volley => "VLY",
            AbilityCode::Fortify => "FRT",
        }
    }

    /// Look up an ability by its notation code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.code() == code)
    }
}

impl std::fmt::Display for AbilityCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// A unit on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub unit: UnitCode,
    pub at: Coord,
}

impl Piece {
    #[must_use]
    pub const fn new(color: Color, unit: UnitCode, at: Coord) -> Self {
        Self { color, unit, at }
    }
}

/// A castle square. Ownership changes when the castle is successfully
/// attacked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Castle {
    pub at: Coord,
    pub owner: Color,
}

impl Castle {
    #[must_use]
    pub const fn new(at: Coord, owner: Color) -> Self {
        Self { at, owner }
    }
}

/// A special zone square. Unclaimed until a pledge is played on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialZone {
    pub at: Coord,
    /// Set once a pledge has been played on this zone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pledge: Option<(Color, PledgeCode)>,
}

impl SpecialZone {
    /// An unclaimed zone.
    #[must_use]
    pub const fn unclaimed(at: Coord) -> Self {
        Self { at, pledge: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trips() {
        for unit in UnitCode::ALL {
            assert_eq!(UnitCode::from_code(unit.code()), Some(unit));
        }
        for pledge in PledgeCode::ALL {
            assert_eq!(PledgeCode::from_code(pledge.code()), Some(pledge));
        }
        for ability in AbilityCode::ALL {
            assert_eq!(AbilityCode::from_code(ability.code()), Some(ability));
        }
    }

    #[test]
    fn test_unknown_codes_rejected() {
        assert_eq!(UnitCode::from_code("XYZ"), None);
        assert_eq!(PledgeCode::from_code("SOL"), None);
        assert_eq!(AbilityCode::from_code("sol"), None);
    }

    #[test]
    fn test_codes_are_disjoint() {
        for unit in UnitCode::ALL {
            assert_eq!(PledgeCode::from_code(unit.code()), None);
            assert_eq!(AbilityCode::from_code(unit.code()), None);
        }
        for pledge in PledgeCode::ALL {
            assert_eq!(AbilityCode::from_code(pledge.code()), None);
        }
    }

    #[test]
    fn test_code_serde() {
        let json = serde_json::to_string(&UnitCode::Soldier).unwrap();
        assert_eq!(json, "\"SOL\"");
        let back: UnitCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, UnitCode::Soldier);
    }
}
