//! Move-text parser: token stream → skeletal history tree.
//!
//! Grammar: `sequence := (plyMarker | move | '(' sequence ')')*`
//!
//! The parser is deliberately optimistic: any token that isn't a marker,
//! paren, or result is inserted as a move's notation, and malformed
//! structure (unmatched parens) degrades locally instead of failing the
//! import. Validation happens later, during hydration.
//!
//! Parenthesized groups are alternatives to the move preceding them, not
//! continuations: on `(` the cursor steps up to the parent of the most
//! recently added node, and on `)` it returns to where the enclosing
//! sequence left off. Descent uses an explicit stack, so arbitrarily
//! nested input cannot exhaust the call stack.

use crate::core::MoveRecord;
use crate::history::{HistoryTree, NodeId};

use super::token::{tokenize, Token};

/// Saved position of an enclosing sequence while a variation is parsed.
struct Frame {
    cursor: NodeId,
    ply: u32,
}

/// Parse move text into a skeletal tree.
///
/// Every inserted record is `Raw`; color and phase are assigned by
/// hydration. The returned tree's cursor sits on the last move of the
/// outermost sequence.
#[must_use]
pub fn parse_movetext(text: &str) -> HistoryTree {
    let mut tree = HistoryTree::new();
    parse_into(&mut tree, text);
    tree
}

/// Parse move text into an existing tree, starting at its cursor.
pub fn parse_into(tree: &mut HistoryTree, text: &str) {
    let mut ply: u32 = 1;
    let mut stack: Vec<Frame> = Vec::new();

    for token in tokenize(text) {
        match token {
            Token::Ply(marker_ply) => ply = marker_ply,
            Token::Outcome(_) => {}
            Token::Open => {
                stack.push(Frame {
                    cursor: tree.cursor(),
                    ply,
                });
                // The group is an alternative to the move just added: back
                // up to its parent. At the root this is a no-op and the
                // group is parsed in place.
                tree.navigate_back();
                ply = ply.saturating_sub(1).max(1);
            }
            Token::Close => {
                // An unmatched `)` is ignored.
                if let Some(frame) = stack.pop() {
                    tree.navigate_to_node(frame.cursor);
                    ply = frame.ply;
                }
            }
            Token::Move(notation) => {
                tree.add_move(MoveRecord::raw(notation, ply), None);
                ply = ply.saturating_add(1);
            }
        }
    }
}
