//! Setup codec: legible ↔ compact, plus the base64 header wrapping.
//!
//! The compact form is a JSON array — `[cols, rows, castles, pieces,
//! zones?, rules?]` — with optional fields omitted from the tail (or null
//! when a later field is present). The legacy uncompacted form is the JSON
//! object serialization of [`Setup`] itself; on import both are accepted,
//! distinguished by the top-level JSON shape.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use rustc_hash::FxHashMap;
use serde_json::{json, Value};
use thiserror::Error;

use crate::core::{Castle, Color, Coord, CoordError, Piece, UnitCode};

use super::{BoardShape, Setup};

/// Error produced when a setup payload fails to decode.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Coord(#[from] CoordError),
    #[error("unknown color index {0}")]
    UnknownColor(u64),
    #[error("unknown unit code '{0}'")]
    UnknownUnit(String),
    #[error("malformed compact setup: {0}")]
    Malformed(&'static str),
}

/// The lossless compact encoding of a [`Setup`].
///
/// Castles are `(coord, owner-index)` pairs, pieces
/// `(color-index, unit-code, coord)` triples; rule settings are sorted by
/// key so encoding is deterministic.
#[derive(Clone, Debug, PartialEq)]
pub struct CompactSetup {
    pub cols: u8,
    pub rows: u8,
    pub castles: Vec<(String, u8)>,
    pub pieces: Vec<(u8, String, String)>,
    pub zones: Option<Vec<String>>,
    pub rules: Option<Vec<(String, i64)>>,
}

impl Setup {
    /// Compact this setup. Total: every setup has a compact form.
    #[must_use]
    pub fn to_compact(&self) -> CompactSetup {
        let rules = self.rules.as_ref().map(|map| {
            let mut entries: Vec<(String, i64)> =
                map.iter().map(|(k, &v)| (k.clone(), v)).collect();
            entries.sort();
            entries
        });
        CompactSetup {
            cols: self.board.cols,
            rows: self.board.rows,
            castles: self
                .castles
                .iter()
                .map(|c| (c.at.to_string(), c.owner.index()))
                .collect(),
            pieces: self
                .pieces
                .iter()
                .map(|p| (p.color.index(), p.unit.code().to_string(), p.at.to_string()))
                .collect(),
            zones: self
                .zones
                .as_ref()
                .map(|zs| zs.iter().map(Coord::to_string).collect()),
            rules,
        }
    }
}

impl CompactSetup {
    /// Expand back into the legible form, the inverse of
    /// [`Setup::to_compact`]. Fails only on foreign data (unknown codes,
    /// bad coordinates).
    pub fn into_setup(self) -> Result<Setup, SetupError> {
        let castles = self
            .castles
            .into_iter()
            .map(|(at, owner)| {
                Ok(Castle::new(
                    at.parse()?,
                    Color::from_index(owner).ok_or(SetupError::UnknownColor(owner as u64))?,
                ))
            })
            .collect::<Result<Vec<_>, SetupError>>()?;
        let pieces = self
            .pieces
            .into_iter()
            .map(|(color, unit, at)| {
                Ok(Piece::new(
                    Color::from_index(color).ok_or(SetupError::UnknownColor(color as u64))?,
                    UnitCode::from_code(&unit).ok_or(SetupError::UnknownUnit(unit))?,
                    at.parse()?,
                ))
            })
            .collect::<Result<Vec<_>, SetupError>>()?;
        let zones = self
            .zones
            .map(|zs| zs.into_iter().map(|z| z.parse()).collect::<Result<Vec<Coord>, _>>())
            .transpose()?;
        let rules = self
            .rules
            .map(|entries| entries.into_iter().collect::<FxHashMap<String, i64>>());
        Ok(Setup {
            board: BoardShape::new(self.cols, self.rows),
            castles,
            pieces,
            zones,
            rules,
        })
    }

    /// The JSON array form of this compact setup. Absent optional fields
    /// are dropped from the tail; an absent field before a present one is
    /// emitted as null.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut items = vec![
            json!(self.cols),
            json!(self.rows),
            json!(self.castles),
            json!(self.pieces),
        ];
        match (&self.zones, &self.rules) {
            (None, None) => {}
            (zones, None) => items.push(json!(zones)),
            (zones, rules) => {
                items.push(json!(zones));
                items.push(json!(rules));
            }
        }
        Value::Array(items)
    }

    /// Parse the JSON array form.
    pub fn from_value(value: &Value) -> Result<Self, SetupError> {
        let items = value
            .as_array()
            .ok_or(SetupError::Malformed("expected an array"))?;
        if items.len() < 4 || items.len() > 6 {
            return Err(SetupError::Malformed("expected 4 to 6 elements"));
        }
        let cols = as_u8(&items[0], "cols")?;
        let rows = as_u8(&items[1], "rows")?;
        let castles: Vec<(String, u8)> = serde_json::from_value(items[2].clone())?;
        let pieces: Vec<(u8, String, String)> = serde_json::from_value(items[3].clone())?;
        let zones = match items.get(4) {
            None | Some(Value::Null) => None,
            Some(v) => Some(serde_json::from_value(v.clone())?),
        };
        let rules = match items.get(5) {
            None | Some(Value::Null) => None,
            Some(v) => Some(serde_json::from_value(v.clone())?),
        };
        Ok(Self {
            cols,
            rows,
            castles,
            pieces,
            zones,
            rules,
        })
    }
}

fn as_u8(value: &Value, what: &'static str) -> Result<u8, SetupError> {
    value
        .as_u64()
        .and_then(|n| u8::try_from(n).ok())
        .ok_or(SetupError::Malformed(what))
}

/// Encode a setup for the `CustomSetup` header tag: compact form, JSON,
/// base64.
#[must_use]
pub fn encode_setup(setup: &Setup) -> String {
    STANDARD.encode(setup.to_compact().to_value().to_string())
}

/// Decode a `CustomSetup` header payload, accepting both the compact array
/// form and the legacy uncompacted object form.
pub fn decode_setup(payload: &str) -> Result<Setup, SetupError> {
    let bytes = STANDARD.decode(payload.trim())?;
    let value: Value = serde_json::from_slice(&bytes)?;
    match value {
        Value::Array(_) => CompactSetup::from_value(&value)?.into_setup(),
        Value::Object(_) => Ok(serde_json::from_value(value)?),
        _ => Err(SetupError::Malformed("expected an array or object")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_setup() -> Setup {
        let mut setup = Setup::new(BoardShape::new(14, 14));
        setup.castles.push(Castle::new(Coord::new(2, 3), Color::White));
        setup
            .castles
            .push(Castle::new(Coord::new(12, 11), Color::Black));
        setup
            .pieces
            .push(Piece::new(Color::White, UnitCode::Soldier, Coord::new(10, 13)));
        setup
            .pieces
            .push(Piece::new(Color::Black, UnitCode::Archer, Coord::new(8, 11)));
        setup
    }

    #[test]
    fn test_compact_round_trip() {
        let setup = sample_setup();
        let back = setup.to_compact().into_setup().unwrap();
        assert_eq!(back, setup);
    }

    #[test]
    fn test_absent_zones_stay_absent() {
        let setup = sample_setup();
        assert!(setup.zones.is_none());

        let compact = setup.to_compact();
        assert!(compact.zones.is_none());
        // The array has no tail at all.
        assert_eq!(compact.to_value().as_array().unwrap().len(), 4);

        let back = compact.into_setup().unwrap();
        assert!(back.zones.is_none());
        assert!(back.rules.is_none());
    }

    #[test]
    fn test_present_zones_round_trip() {
        let mut setup = sample_setup();
        setup.zones = Some(vec![Coord::new(6, 7), Coord::new(7, 7)]);

        let back = setup.to_compact().into_setup().unwrap();
        assert_eq!(back.zones, setup.zones);
    }

    #[test]
    fn test_rules_without_zones_uses_null_slot() {
        let mut setup = sample_setup();
        let mut rules = FxHashMap::default();
        rules.insert("pledgeLimit".to_string(), 2);
        setup.rules = Some(rules);

        let value = setup.to_compact().to_value();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 6);
        assert!(items[4].is_null());

        let back = CompactSetup::from_value(&value).unwrap().into_setup().unwrap();
        assert_eq!(back, setup);
    }

    #[test]
    fn test_header_round_trip() {
        let mut setup = sample_setup();
        setup.zones = Some(vec![Coord::new(6, 7)]);

        let payload = encode_setup(&setup);
        assert!(!payload.contains(' '));
        let back = decode_setup(&payload).unwrap();
        assert_eq!(back, setup);
    }

    #[test]
    fn test_legacy_object_form_accepted() {
        let setup = sample_setup();
        let legacy_json = serde_json::to_string(&setup).unwrap();
        let payload = STANDARD.encode(legacy_json);

        let back = decode_setup(&payload).unwrap();
        assert_eq!(back, setup);
    }

    #[test]
    fn test_bad_payloads_rejected() {
        assert!(matches!(
            decode_setup("!!not-base64!!"),
            Err(SetupError::Base64(_))
        ));
        assert!(matches!(
            decode_setup(&STANDARD.encode("not json")),
            Err(SetupError::Json(_))
        ));
        assert!(matches!(
            decode_setup(&STANDARD.encode("42")),
            Err(SetupError::Malformed(_))
        ));
        // Compact form with an unknown unit code.
        let bad = json!([10, 10, [], [[0, "XYZ", "A1"]]]).to_string();
        assert!(matches!(
            decode_setup(&STANDARD.encode(bad)),
            Err(SetupError::UnknownUnit(_))
        ));
    }
}
