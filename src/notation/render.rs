//! Move-text renderer: history tree → text, the parser's inverse.
//!
//! Walks the main line iteratively, emitting each main move followed by a
//! parenthesized rendering of every side line branching at that point.
//! White moves always carry a `N.` marker; a black move carries `N...`
//! only when it opens a line or directly follows a just-closed variation.
//! Recursion depth equals variation nesting depth, not game length.

use crate::history::{HistoryTree, NodeId};

/// Render a tree's move text. An empty tree renders as an empty string.
#[must_use]
pub fn render_movetext(tree: &HistoryTree) -> String {
    let mut tokens: Vec<String> = Vec::new();
    render_line(tree, tree.root(), true, &mut tokens);
    join_tokens(&tokens)
}

/// Render the line continuing from `start` (exclusive): for each step, the
/// main child plus its sibling variations. `marker_pending` forces a
/// `N...` marker on an immediately following black move.
fn render_line(tree: &HistoryTree, start: NodeId, mut marker_pending: bool, out: &mut Vec<String>) {
    let mut current = start;
    loop {
        let node = match tree.get(current) {
            Some(node) => node,
            None => return,
        };
        let main = match node.selected_child() {
            Some(main) => main,
            None => return,
        };

        push_move(tree, main, marker_pending, out);
        for side in node.side_children() {
            out.push("(".to_string());
            render_variation(tree, side, out);
            out.push(")".to_string());
        }

        marker_pending = node.has_variations();
        current = main;
    }
}

/// Render a side line starting at (and including) `head`. The first move
/// of a variation always carries its marker.
fn render_variation(tree: &HistoryTree, head: NodeId, out: &mut Vec<String>) {
    push_move(tree, head, true, out);
    render_line(tree, head, false, out);
}

/// Emit the marker (if due) and notation for one move node.
fn push_move(tree: &HistoryTree, id: NodeId, marker_pending: bool, out: &mut Vec<String>) {
    let record = match tree.get(id) {
        Some(node) => &node.record,
        None => return,
    };
    let ply = record.ply();
    let number = (ply + 1) / 2;
    if ply % 2 == 1 {
        out.push(format!("{number}."));
    } else if marker_pending {
        out.push(format!("{number}..."));
    }
    out.push(record.notation().to_string());
}

/// Join tokens with spaces, keeping parens snug against their variation.
fn join_tokens(tokens: &[String]) -> String {
    let mut out = String::new();
    for token in tokens {
        if !out.is_empty() && token != ")" && !out.ends_with('(') {
            out.push(' ');
        }
        out.push_str(token);
    }
    out
}
