//! The text-protocol facade: whole games to text and back.
//!
//! A serialized game is a header block of `[Key "Value"]` tag lines (the
//! `CustomSetup` tag carries the encoded setup), a blank line, then move
//! text. Import is forgiving: a missing or malformed setup tag leaves
//! `setup = None` (the caller falls back to a default position) and the
//! move text still parses. The only hard failure is an input exceeding
//! the raw size limit, which is enforced before any tokenization.

use log::{debug, warn};
use thiserror::Error;

use crate::history::HistoryTree;
use crate::hydrate::{hydrate, HydrationReport};
use crate::notation::{parse_movetext, render_movetext};
use crate::rules::RulesEngine;
use crate::setup::{decode_setup, encode_setup, Setup};

use super::tags::{TagPairs, CUSTOM_SETUP_TAG};

/// Hard cap on raw import size, applied before tokenizing.
pub const MAX_IMPORT_BYTES: usize = 1 << 20;

/// Error produced by [`import_text`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("input is {0} bytes; the import limit is {MAX_IMPORT_BYTES}")]
    TooLarge(usize),
}

/// A deserialized game: setup (if the header carried a valid one), all
/// header tags verbatim, and the skeletal move tree.
#[derive(Clone, Debug)]
pub struct ImportedGame {
    pub setup: Option<Setup>,
    pub tags: TagPairs,
    pub tree: HistoryTree,
}

/// Serialize a game: header block, blank line, move text.
///
/// The `CustomSetup` tag is always written first; a `CustomSetup` entry in
/// `tags` is ignored in favor of the actual setup.
#[must_use]
pub fn export_text(setup: &Setup, tags: &TagPairs, tree: &HistoryTree) -> String {
    let mut out = String::new();
    out.push_str(&TagPairs::render_line(CUSTOM_SETUP_TAG, &encode_setup(setup)));
    out.push('\n');
    for (key, value) in tags.iter() {
        if key != CUSTOM_SETUP_TAG {
            out.push_str(&TagPairs::render_line(key, value));
            out.push('\n');
        }
    }
    out.push('\n');
    out.push_str(&render_movetext(tree));
    out.push('\n');
    out
}

/// Deserialize a game.
///
/// Header tags are consumed from the top of the input; the first line that
/// is neither a tag nor blank starts the move text. Setup problems are
/// logged and degrade to `setup = None`.
pub fn import_text(input: &str) -> Result<ImportedGame, ImportError> {
    if input.len() > MAX_IMPORT_BYTES {
        return Err(ImportError::TooLarge(input.len()));
    }

    let mut tags = TagPairs::new();
    let mut movetext = String::new();
    let mut in_header = true;
    for line in input.lines() {
        if in_header {
            if let Some((key, value)) = TagPairs::parse_line(line) {
                tags.set(key, value);
                continue;
            }
            if line.trim().is_empty() {
                continue;
            }
            in_header = false;
        }
        movetext.push_str(line);
        movetext.push('\n');
    }

    let setup = match tags.get(CUSTOM_SETUP_TAG) {
        Some(payload) => match decode_setup(payload) {
            Ok(setup) => Some(setup),
            Err(error) => {
                warn!("ignoring malformed {CUSTOM_SETUP_TAG} tag: {error}");
                None
            }
        },
        None => {
            debug!("no {CUSTOM_SETUP_TAG} tag; caller must supply a position");
            None
        }
    };

    Ok(ImportedGame {
        setup,
        tags,
        tree: parse_movetext(&movetext),
    })
}

/// Import and immediately hydrate against `rules`, falling back to
/// `default_setup` when the header carries no usable setup.
pub fn import_hydrated<R: RulesEngine>(
    input: &str,
    rules: &R,
    default_setup: &Setup,
) -> Result<(ImportedGame, HydrationReport), ImportError> {
    let mut game = import_text(input)?;
    let setup = game.setup.clone().unwrap_or_else(|| default_setup.clone());
    let report = hydrate(&mut game.tree, &setup, rules);
    Ok((game, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, Coord, UnitCode};
    use crate::games::skirmish::SkirmishSetupBuilder;

    fn sample_setup() -> Setup {
        SkirmishSetupBuilder::new()
            .castle(Coord::new(2, 3), Color::White)
            .piece(Color::White, UnitCode::Soldier, Coord::new(10, 13))
            .build()
    }

    #[test]
    fn test_export_shape() {
        let setup = sample_setup();
        let mut tags = TagPairs::new();
        tags.set("Event", "Winter Siege");

        let tree = crate::notation::parse_movetext("1. K13N11");
        let text = export_text(&setup, &tags, &tree);

        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("[CustomSetup \""));
        assert_eq!(lines.next().unwrap(), "[Event \"Winter Siege\"]");
        assert_eq!(lines.next().unwrap(), "");
        assert_eq!(lines.next().unwrap(), "1. K13N11");
    }

    #[test]
    fn test_import_round_trip() {
        let setup = sample_setup();
        let mut tags = TagPairs::new();
        tags.set("Event", "Winter Siege");
        tags.set("Obscure", "kept verbatim");

        let tree = crate::notation::parse_movetext("1. K13N11 Pass");
        let text = export_text(&setup, &tags, &tree);

        let game = import_text(&text).unwrap();
        assert_eq!(game.setup.as_ref(), Some(&setup));
        assert_eq!(game.tags.get("Event"), Some("Winter Siege"));
        assert_eq!(game.tags.get("Obscure"), Some("kept verbatim"));
        assert_eq!(game.tree.len(), tree.len());
    }

    #[test]
    fn test_missing_setup_tag_is_nonfatal() {
        let game = import_text("[Event \"Casual\"]\n\n1. J11J10\n").unwrap();
        assert!(game.setup.is_none());
        assert_eq!(game.tags.get("Event"), Some("Casual"));
        assert_eq!(game.tree.len(), 2);
    }

    #[test]
    fn test_malformed_setup_tag_is_nonfatal() {
        let game = import_text("[CustomSetup \"!!garbage!!\"]\n\n1. J11J10\n").unwrap();
        assert!(game.setup.is_none());
        // The tag itself is still preserved as metadata.
        assert_eq!(game.tags.get(CUSTOM_SETUP_TAG), Some("!!garbage!!"));
        assert_eq!(game.tree.len(), 2);
    }

    #[test]
    fn test_headerless_movetext() {
        let game = import_text("1. J11J10 I11I10\n").unwrap();
        assert!(game.setup.is_none());
        assert!(game.tags.is_empty());
        assert_eq!(game.tree.len(), 3);
    }

    #[test]
    fn test_too_large_rejected() {
        let huge = "Pass ".repeat(MAX_IMPORT_BYTES / 4);
        assert!(matches!(
            import_text(&huge),
            Err(ImportError::TooLarge(_))
        ));
    }

    #[test]
    fn test_tag_order_insensitive() {
        let forward = import_text("[A \"1\"]\n[B \"2\"]\n\nPass\n").unwrap();
        let reversed = import_text("[B \"2\"]\n[A \"1\"]\n\nPass\n").unwrap();
        assert_eq!(forward.tags.get("A"), reversed.tags.get("A"));
        assert_eq!(forward.tags.get("B"), reversed.tags.get("B"));
    }
}
