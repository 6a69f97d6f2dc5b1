//! The text protocol: header tags plus move text, and the facade that
//! composes codec, parser, renderer, and hydration into whole-game
//! export/import.

pub mod facade;
pub mod tags;

pub use facade::{
    export_text, import_hydrated, import_text, ImportError, ImportedGame, MAX_IMPORT_BYTES,
};
pub use tags::{TagPairs, CUSTOM_SETUP_TAG};
