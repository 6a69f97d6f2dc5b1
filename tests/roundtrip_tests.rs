//! Round-trip tests across the notation and protocol layers.
//!
//! These exercise the parser/renderer pair and the whole-game facade:
//! - main-line move text survives render → parse unchanged
//! - setups survive the compact codec and the base64 header
//! - full games survive export → import

use proptest::prelude::*;

use stronghold_notation::games::skirmish::SkirmishSetupBuilder;
use stronghold_notation::{
    export_text, import_text, parse_movetext, render_movetext, BoardShape, Color, Coord,
    HistoryTree, MoveRecord, Setup, TagPairs, UnitCode,
};

#[test]
fn test_simple_game_text_round_trips() {
    let text = "1. J11J10 I11I10";
    let tree = parse_movetext(text);

    let notations: Vec<String> = tree
        .history_line()
        .iter()
        .map(|r| r.notation().to_string())
        .collect();
    assert_eq!(notations, vec!["J11J10", "I11I10"]);

    assert_eq!(render_movetext(&tree), text);
}

#[test]
fn test_full_protocol_round_trip() {
    let setup = SkirmishSetupBuilder::new()
        .castle(Coord::new(2, 3), Color::White)
        .castle(Coord::new(12, 11), Color::Black)
        .piece(Color::White, UnitCode::Soldier, Coord::new(10, 13))
        .zone(Coord::new(6, 7))
        .build();

    let mut tags = TagPairs::new();
    tags.set("Event", "Winter Siege");
    tags.set("Round", "3");

    let mut tree = HistoryTree::new();
    tree.add_move(MoveRecord::raw("K13N11", 1), None);
    tree.add_move(MoveRecord::raw("Pass", 2), None);
    tree.add_move(MoveRecord::raw("N11xM11", 3), None);

    let text = export_text(&setup, &tags, &tree);
    let game = import_text(&text).unwrap();

    assert_eq!(game.setup.as_ref(), Some(&setup));
    assert_eq!(game.tags.get("Event"), Some("Winter Siege"));
    assert_eq!(game.tags.get("Round"), Some("3"));

    let reimported: Vec<String> = game
        .tree
        .history_line()
        .iter()
        .map(|r| r.notation().to_string())
        .collect();
    assert_eq!(reimported, vec!["K13N11", "Pass", "N11xM11"]);

    // A second export of the re-imported game is byte-identical.
    assert_eq!(export_text(&setup, &game.tags, &game.tree), text);
}

#[test]
fn test_variation_survives_protocol() {
    let setup = Setup::new(BoardShape::new(14, 14));
    let tags = TagPairs::new();
    let tree = parse_movetext("1. d4 (1. e4) 1... e5 2. c4");

    let text = export_text(&setup, &tags, &tree);
    let game = import_text(&text).unwrap();

    assert_eq!(game.tree.len(), tree.len());
    let root = game.tree.view_node(Some(game.tree.root())).unwrap();
    assert_eq!(root.children.len(), 2);
}

// === Property tests ===

fn coord_strategy() -> impl Strategy<Value = Coord> {
    (0u8..14, 1u16..15).prop_map(|(file, rank)| Coord::new(file, rank))
}

/// Any of the six move-token shapes.
fn notation_strategy() -> impl Strategy<Value = String> {
    let unit = prop::sample::select(UnitCode::ALL.to_vec());
    prop_oneof![
        (coord_strategy(), coord_strategy()).prop_map(|(a, b)| format!("{a}{b}")),
        (coord_strategy(), coord_strategy()).prop_map(|(a, b)| format!("{a}x{b}")),
        (coord_strategy(), unit).prop_map(|(a, u)| format!("{a}={u}")),
        coord_strategy().prop_map(|a| format!("P:GRD{a}")),
        coord_strategy().prop_map(|a| format!("A:RLY{a}")),
        Just("Pass".to_string()),
    ]
}

proptest! {
    #[test]
    fn prop_main_line_round_trips(moves in prop::collection::vec(notation_strategy(), 1..40)) {
        let mut tree = HistoryTree::new();
        for (i, notation) in moves.iter().enumerate() {
            tree.add_move(MoveRecord::raw(notation.clone(), i as u32 + 1), None);
        }

        let reparsed = parse_movetext(&render_movetext(&tree));
        let notations: Vec<String> = reparsed
            .history_line()
            .iter()
            .map(|r| r.notation().to_string())
            .collect();
        prop_assert_eq!(notations, moves);
    }

    #[test]
    fn prop_setup_codec_bijective(
        castles in prop::collection::vec((coord_strategy(), any::<bool>()), 0..4),
        pieces in prop::collection::vec(
            (any::<bool>(), prop::sample::select(UnitCode::ALL.to_vec()), coord_strategy()),
            0..8,
        ),
        zones in prop::option::of(prop::collection::vec(coord_strategy(), 0..4)),
    ) {
        let color = |white: bool| if white { Color::White } else { Color::Black };
        let mut setup = Setup::new(BoardShape::new(14, 14));
        for (at, white) in castles {
            setup.castles.push(stronghold_notation::Castle::new(at, color(white)));
        }
        for (white, unit, at) in pieces {
            setup.pieces.push(stronghold_notation::Piece::new(color(white), unit, at));
        }
        setup.zones = zones;

        let compact = setup.to_compact();
        prop_assert_eq!(compact.clone().into_setup().unwrap(), setup.clone());

        let decoded = stronghold_notation::decode_setup(
            &stronghold_notation::encode_setup(&setup),
        ).unwrap();
        prop_assert_eq!(decoded, setup);
    }
}
