//! # stronghold-notation
//!
//! Move history, notation, and replay engine for the Stronghold board game.
//!
//! ## Design Principles
//!
//! 1. **History Is Append-Only**: the variation tree records every move
//!    ever played, including abandoned alternatives. Stepping backward
//!    moves a cursor; nothing is deleted.
//!
//! 2. **Optimistic Parsing, Strict Hydration**: the parser accepts any
//!    token as notation and never fails; the hydration engine replays each
//!    branch against the rules engine and truncates exactly the branches
//!    that turn out to be illegal.
//!
//! 3. **Rules Stay External**: movement geometry, combat, and pledge
//!    eligibility live behind the `RulesEngine` trait. This crate encodes,
//!    stores, and replays — it never judges legality itself.
//!
//! ## Architecture
//!
//! - **Arena Tree**: nodes in a flat `Vec` with index ids; the parent
//!   back-reference is a plain id, so there is no ownership cycle.
//!
//! - **Persistent Snapshots**: board states use `im` collections, so the
//!   per-node snapshots produced by hydration share structure.
//!
//! - **Explicit-Stack Traversals**: parser and hydrator iterate with their
//!   own stacks; pathological import depth cannot exhaust the call stack.
//!
//! ## Modules
//!
//! - `core`: colors, coordinates, code enumerations, actions, records,
//!   board states
//! - `history`: the variation tree with its live cursor
//! - `notation`: tokenizer, parser, renderer for move text
//! - `setup`: setup descriptions and the compact/base64 codec
//! - `rules`: the consumed rules-engine interface
//! - `hydrate`: replay of skeletal trees into validated snapshots
//! - `protocol`: header tags and the export/import facade
//! - `games`: the skirmish reference rules engine

pub mod core;
pub mod games;
pub mod history;
pub mod hydrate;
pub mod notation;
pub mod protocol;
pub mod rules;
pub mod setup;

// Re-export commonly used types
pub use crate::core::{
    AbilityCode, BoardState, Castle, Color, Coord, DecodeError, GameAction, MoveRecord, PhaseId,
    Piece, PledgeCode, SpecialZone, UnitCode,
};

pub use crate::history::{HistoryTree, MoveNode, NodeId};

pub use crate::notation::{parse_movetext, render_movetext, GameOutcome};

pub use crate::setup::{decode_setup, encode_setup, BoardShape, CompactSetup, Setup, SetupError};

pub use crate::rules::{RulesEngine, RulesError};

pub use crate::hydrate::{hydrate, HydrationError, HydrationFailure, HydrationReport};

pub use crate::protocol::{
    export_text, import_hydrated, import_text, ImportError, ImportedGame, TagPairs,
    CUSTOM_SETUP_TAG, MAX_IMPORT_BYTES,
};
